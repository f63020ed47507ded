//! Anomaly solvers for the three conic regimes.
//!
//! All solvers are bounded: if the iteration has not met its tolerance after
//! [`MAX_ITERATIONS`] passes the caller gets a loud [`OrreryError::KeplerDivergence`]
//! instead of a stale value. The bound is generous; in practice the elliptic
//! fixed point needs a handful of passes and Newton a few more near e = 1.

use std::f64::consts::PI;

use crate::constants::{principal_angle, sin_deg, Degree, Radian, RADEG};
use crate::errors::OrreryError;

const MAX_ITERATIONS: usize = 100;

/// Convergence tolerance for the radian-valued solvers.
const TOLERANCE: f64 = 1.0e-12;

/// Solve `E - e sin E = M` for the eccentric anomaly, in radians.
///
/// Low eccentricities use the classical fixed point; from e = 0.6 up a
/// Newton iteration seeded at π is used, which stays monotone over the whole
/// elliptic range.
pub(crate) fn solve_elliptic(mean_anomaly: Radian, e: f64) -> Result<Radian, OrreryError> {
    let m = principal_angle(mean_anomaly);

    if e < 0.6 {
        let mut e1 = m + e * m.sin();
        for _ in 0..MAX_ITERATIONS {
            let e2 = e1;
            e1 = m + e * e2.sin();
            if (e1 - e2).abs() < TOLERANCE {
                return Ok(e1);
            }
        }
        Err(OrreryError::KeplerDivergence {
            iterations: MAX_ITERATIONS,
            residual: (e1 - e * e1.sin() - m).abs(),
        })
    } else {
        let mut ecc = PI;
        for _ in 0..MAX_ITERATIONS {
            let delta = (m + e * ecc.sin() - ecc) / (1.0 - e * ecc.cos());
            ecc += delta;
            if delta.abs() < TOLERANCE {
                return Ok(ecc);
            }
        }
        Err(OrreryError::KeplerDivergence {
            iterations: MAX_ITERATIONS,
            residual: (ecc - e * ecc.sin() - m).abs(),
        })
    }
}

/// Loose degree-valued fixed point used by the mean-element tables.
///
/// Seeded at E₀ = M and iterated until the step drops under 1e-5 degrees, the
/// convention of the legacy planet tables (their eccentricities stay below 0.26).
pub(crate) fn solve_elliptic_deg(mean_anomaly: Degree, e: f64) -> Result<Degree, OrreryError> {
    // the sine feeds back in degrees, so the eccentricity scales by 180/pi
    let e_deg = e / RADEG;
    let mut e1 = mean_anomaly;
    for _ in 0..MAX_ITERATIONS {
        let e2 = e1;
        e1 = mean_anomaly + e_deg * sin_deg(e2);
        if (e1 - e2).abs() < 1.0e-5 {
            return Ok(e1);
        }
    }
    Err(OrreryError::KeplerDivergence {
        iterations: MAX_ITERATIONS,
        residual: (e1 - e_deg * sin_deg(e1) - mean_anomaly).abs(),
    })
}

/// Solve `e sinh F - F = M` for the hyperbolic anomaly.
pub(crate) fn solve_hyperbolic(mean_anomaly: f64, e: f64) -> Result<f64, OrreryError> {
    let mut f = (mean_anomaly / e).asinh();
    for _ in 0..MAX_ITERATIONS {
        let delta = (mean_anomaly + f - e * f.sinh()) / (e * f.cosh() - 1.0);
        f += delta;
        if delta.abs() < TOLERANCE {
            return Ok(f);
        }
    }
    Err(OrreryError::KeplerDivergence {
        iterations: MAX_ITERATIONS,
        residual: (e * f.sinh() - f - mean_anomaly).abs(),
    })
}

/// Solve Barker's equation `s³/3 + s = N` for `s = tan(ν/2)`.
///
/// Closed form via the cubic's single real root; no iteration involved.
pub(crate) fn solve_barker(n: f64) -> f64 {
    let w = 1.5 * n;
    let b = (w + (w * w + 1.0).sqrt()).cbrt();
    b - 1.0 / b
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_elliptic_residual_low_e() {
        let e = 0.0167;
        for k in 0..12 {
            let m = k as f64 * 0.5;
            let ecc = solve_elliptic(m, e).unwrap();
            assert_relative_eq!(ecc - e * ecc.sin(), principal_angle(m), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_elliptic_residual_high_e() {
        let e = 0.967267; // Halley
        for k in 0..12 {
            let m = k as f64 * 0.5;
            let ecc = solve_elliptic(m, e).unwrap();
            assert_relative_eq!(ecc - e * ecc.sin(), principal_angle(m), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_elliptic_zero_anomaly() {
        assert_relative_eq!(solve_elliptic(0.0, 0.3).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_elliptic_degrees() {
        let e = 0.2056; // Mercury
        let ecc = solve_elliptic_deg(75.0, e).unwrap();
        // residual within the loose legacy tolerance
        let e_deg = e / RADEG;
        assert!((ecc - e_deg * sin_deg(ecc) - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_hyperbolic_residual() {
        let e = 1.2;
        for k in -6..=6 {
            let m = k as f64 * 0.8;
            let f = solve_hyperbolic(m, e).unwrap();
            assert_relative_eq!(e * f.sinh() - f, m, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hyperbolic_symmetry() {
        let f = solve_hyperbolic(2.0, 1.5).unwrap();
        let g = solve_hyperbolic(-2.0, 1.5).unwrap();
        assert_relative_eq!(f, -g, epsilon = 1e-12);
    }

    #[test]
    fn test_barker_cubic() {
        for k in -8..=8 {
            let n = k as f64 * 0.7;
            let s = solve_barker(n);
            assert_relative_eq!(s * s * s / 3.0 + s, n, epsilon = 1e-10);
        }
    }
}
