//! # Orbit tessellation
//!
//! Polyline approximations of orbits for display. A curve is immutable after
//! construction and records the epoch it was built for; deciding when to
//! rebuild (see [`OrbitCurve::is_stale`]) is the caller's cache policy.
//!
//! Orbits reaching past [`MAX_ORBIT_RADIUS_AU`] are not traced in full: only
//! the near-perihelion arc inside that radius is sampled, since the rest of a
//! 10^2..10^4 AU ellipse would collapse into a single screen pixel anyway.

use nalgebra::Vector3;

use crate::astro_time::TimeEpoch;
use crate::comet::{CometElements, ConicRegime};
use crate::constants::{JulianDay, DAYS_PER_YEAR, DPI, MAX_ORBIT_RADIUS_AU, RADEG};
use crate::errors::OrreryError;
use crate::frames::orbital_plane_matrix;
use crate::planets::MeanElements;

/// Anomaly sampling scheme for open or clamped orbits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Uniform eccentric anomaly over the whole ellipse, even when the
    /// aphelion lies outside the display clamp.
    Uniform,
    /// Historical scheme: ellipses reaching past the display clamp are
    /// sampled only along the arc inside it.
    LegacyDense,
}

/// A tessellated orbit: `divisions + 1` points along the path.
///
/// Comet curves are expressed in the equatorial frame of the comet's equinox,
/// planet curves in the heliocentric ecliptic frame, matching the frames their
/// position functions use.
#[derive(Debug, Clone)]
pub struct OrbitCurve {
    points: Vec<Vector3<f64>>,
    epoch_jd: JulianDay,
}

/// Validity half-window of a curve, in Julian years.
const STALE_YEARS: f64 = 5.0;

impl OrbitCurve {
    /// Tessellate a comet orbit into `divisions + 1` points.
    ///
    /// Closed orbits inside the display clamp are traced in full from
    /// perihelion; clamped and open orbits are traced symmetrically about
    /// perihelion, so with an even `divisions` the middle point is the
    /// perihelion itself.
    pub fn for_comet(
        elements: &CometElements,
        divisions: usize,
        mode: SamplingMode,
    ) -> Result<OrbitCurve, OrreryError> {
        if divisions < 2 {
            return Err(OrreryError::InvalidDivisions(divisions));
        }
        let e = elements.eccentricity();
        let q = elements.perihelion_distance();
        let matrix = elements.vector_constant_matrix();

        let mut points = Vec::with_capacity(divisions + 1);
        match elements.regime() {
            ConicRegime::Parabolic => {
                // r = q (1 + s^2), clamp at the display radius
                let s1 = (MAX_ORBIT_RADIUS_AU / q - 1.0).max(0.0).sqrt();
                for i in 0..=divisions {
                    let s = s1 * (2.0 * i as f64 / divisions as f64 - 1.0);
                    points.push(matrix * Vector3::new(q * (1.0 - s * s), 2.0 * q * s, 0.0));
                }
            }
            ConicRegime::Elliptic => {
                let a = q / (1.0 - e);
                let aphelion = a * (1.0 + e);
                let clamp =
                    matches!(mode, SamplingMode::LegacyDense) && aphelion > MAX_ORBIT_RADIUS_AU;
                if clamp {
                    // arc with r <= clamp: a (1 - e cos E) = clamp; once the
                    // perihelion itself lies outside, the arc degenerates to
                    // the perihelion point
                    let e1 = (((1.0 - MAX_ORBIT_RADIUS_AU / a) / e).min(1.0)).acos();
                    for i in 0..=divisions {
                        let ecc = e1 * (2.0 * i as f64 / divisions as f64 - 1.0);
                        points.push(matrix * ellipse_point(a, e, ecc));
                    }
                } else {
                    for i in 0..=divisions {
                        let ecc = DPI * i as f64 / divisions as f64;
                        points.push(matrix * ellipse_point(a, e, ecc));
                    }
                }
            }
            ConicRegime::Hyperbolic => {
                // r = a (e cosh F - 1), clamp at the display radius
                let a = q / (e - 1.0);
                let f1 = (((MAX_ORBIT_RADIUS_AU / a + 1.0) / e).max(1.0)).acosh();
                for i in 0..=divisions {
                    let f = f1 * (2.0 * i as f64 / divisions as f64 - 1.0);
                    points.push(matrix * Vector3::new(
                        a * (e - f.cosh()),
                        a * (e * e - 1.0).sqrt() * f.sinh(),
                        0.0,
                    ));
                }
            }
        }

        Ok(OrbitCurve {
            points,
            epoch_jd: elements.equinox().julian_day(),
        })
    }

    /// Closed ellipse of a planet's mean orbit, `divisions + 1` points with
    /// the last repeating the first.
    pub fn for_planet(elements: &MeanElements, divisions: usize) -> Result<OrbitCurve, OrreryError> {
        if divisions < 2 {
            return Err(OrreryError::InvalidDivisions(divisions));
        }
        let a = elements.semi_major_axis;
        let e = elements.eccentricity;
        let matrix = orbital_plane_matrix(
            (elements.perihelion - elements.node) * RADEG,
            elements.node * RADEG,
            elements.inclination * RADEG,
        );

        let mut points = Vec::with_capacity(divisions + 1);
        for i in 0..=divisions {
            let ecc = DPI * i as f64 / divisions as f64;
            points.push(matrix * ellipse_point(a, e, ecc));
        }
        Ok(OrbitCurve {
            points,
            epoch_jd: elements.epoch_jd,
        })
    }

    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// Julian day the curve was built for.
    pub fn epoch_jd(&self) -> JulianDay {
        self.epoch_jd
    }

    /// Whether `epoch` has drifted more than five Julian years from the
    /// curve's construction epoch.
    pub fn is_stale(&self, epoch: &TimeEpoch) -> bool {
        (epoch.julian_day() - self.epoch_jd).abs() > STALE_YEARS * DAYS_PER_YEAR
    }
}

#[inline]
fn ellipse_point(a: f64, e: f64, ecc_anomaly: f64) -> Vector3<f64> {
    Vector3::new(
        a * (ecc_anomaly.cos() - e),
        a * (1.0 - e * e).sqrt() * ecc_anomaly.sin(),
        0.0,
    )
}

#[cfg(test)]
mod orbit_curve_test {
    use super::*;
    use crate::constants::JD2000;
    use crate::planets::Planet;
    use approx::assert_relative_eq;

    fn halley() -> CometElements {
        CometElements::new(
            0.967267,
            0.587096,
            111.8657,
            58.8601,
            162.2422,
            JD2000,
            2446470.95175,
        )
        .unwrap()
    }

    fn wide_ellipse() -> CometElements {
        // aphelion around 120 AU, well past the display clamp
        CometElements::new(0.99, 0.6, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap()
    }

    #[test]
    fn test_point_counts() {
        let halley = halley();
        for divisions in [2, 40, 300] {
            let curve = OrbitCurve::for_comet(&halley, divisions, SamplingMode::Uniform).unwrap();
            assert_eq!(curve.points().len(), divisions + 1);
        }
        let parabolic = CometElements::new(1.0, 1.0, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let curve = OrbitCurve::for_comet(&parabolic, 64, SamplingMode::Uniform).unwrap();
        assert_eq!(curve.points().len(), 65);
    }

    #[test]
    fn test_rejects_degenerate_divisions() {
        let halley = halley();
        for divisions in [0, 1] {
            assert_eq!(
                OrbitCurve::for_comet(&halley, divisions, SamplingMode::Uniform).unwrap_err(),
                OrreryError::InvalidDivisions(divisions)
            );
        }
    }

    #[test]
    fn test_closed_ellipse_wraps() {
        let halley = halley();
        let curve = OrbitCurve::for_comet(&halley, 48, SamplingMode::Uniform).unwrap();
        let first = curve.points()[0];
        let last = curve.points()[48];
        assert_relative_eq!((first - last).norm(), 0.0, epsilon = 1e-9);
        // the trace starts at perihelion
        assert_relative_eq!(first.norm(), 0.587096, epsilon = 1e-4);
    }

    #[test]
    fn test_ellipse_radii_bounded() {
        let halley = halley();
        let aphelion = halley.aphelion_distance().unwrap();
        let curve = OrbitCurve::for_comet(&halley, 100, SamplingMode::Uniform).unwrap();
        for p in curve.points() {
            let r = p.norm();
            assert!(r >= 0.587 - 1e-3 && r <= aphelion + 1e-9);
        }
    }

    #[test]
    fn test_legacy_clamps_wide_ellipse() {
        let wide = wide_ellipse();
        let curve = OrbitCurve::for_comet(&wide, 100, SamplingMode::LegacyDense).unwrap();
        for p in curve.points() {
            assert!(p.norm() <= MAX_ORBIT_RADIUS_AU + 1e-6);
        }
        // arc endpoints sit on the clamp radius
        assert_relative_eq!(curve.points()[0].norm(), MAX_ORBIT_RADIUS_AU, epsilon = 1e-6);
        // perihelion at the middle of the symmetric arc
        assert_relative_eq!(curve.points()[50].norm(), 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_legacy_degenerates_when_perihelion_outside_clamp() {
        // perihelion already past the display radius: the clamped arc
        // collapses to the perihelion point instead of going non-finite
        let distant = CometElements::new(0.5, 100.0, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let curve = OrbitCurve::for_comet(&distant, 40, SamplingMode::LegacyDense).unwrap();
        assert_eq!(curve.points().len(), 41);
        for p in curve.points() {
            assert!(p.iter().all(|c| c.is_finite()));
            assert_relative_eq!(p.norm(), 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_uniform_mode_traces_full_wide_ellipse() {
        let wide = wide_ellipse();
        let curve = OrbitCurve::for_comet(&wide, 100, SamplingMode::Uniform).unwrap();
        let max = curve.points().iter().map(|p| p.norm()).fold(0.0, f64::max);
        assert!(max > MAX_ORBIT_RADIUS_AU);
    }

    #[test]
    fn test_modes_agree_inside_clamp() {
        // for a small ellipse the mode makes no difference
        let halley = halley();
        let uniform = OrbitCurve::for_comet(&halley, 64, SamplingMode::Uniform).unwrap();
        let legacy = OrbitCurve::for_comet(&halley, 64, SamplingMode::LegacyDense).unwrap();
        assert_eq!(uniform.points().len(), legacy.points().len());
        for (a, b) in uniform.points().iter().zip(legacy.points()) {
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_parabolic_symmetric_and_clamped() {
        let parabolic = CometElements::new(1.0, 0.8, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let curve = OrbitCurve::for_comet(&parabolic, 60, SamplingMode::Uniform).unwrap();
        for p in curve.points() {
            assert!(p.norm() <= MAX_ORBIT_RADIUS_AU + 1e-6);
        }
        assert_relative_eq!(curve.points()[30].norm(), 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_hyperbolic_arc() {
        let comet = CometElements::new(1.2, 2.0, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let curve = OrbitCurve::for_comet(&comet, 40, SamplingMode::Uniform).unwrap();
        assert_eq!(curve.points().len(), 41);
        assert_relative_eq!(curve.points()[20].norm(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(curve.points()[0].norm(), MAX_ORBIT_RADIUS_AU, epsilon = 1e-6);
    }

    #[test]
    fn test_planet_curve() {
        let epoch = TimeEpoch::from_jd(JD2000).unwrap();
        let elements = MeanElements::for_planet(Planet::Mars, &epoch).unwrap();
        let curve = OrbitCurve::for_planet(&elements, 72).unwrap();
        assert_eq!(curve.points().len(), 73);
        for p in curve.points() {
            let r = p.norm();
            assert!(
                r >= elements.perihelion_distance() - 1e-9
                    && r <= elements.aphelion_distance() + 1e-9
            );
        }
        // the planet's own position lies on the curve plane
        let pos = elements.position().unwrap();
        let normal = curve.points()[0].cross(&curve.points()[18]).normalize();
        assert_relative_eq!(normal.dot(&pos) / pos.norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_staleness_window() {
        let epoch = TimeEpoch::from_jd(JD2000).unwrap();
        let elements = MeanElements::for_planet(Planet::Earth, &epoch).unwrap();
        let curve = OrbitCurve::for_planet(&elements, 36).unwrap();
        let near = TimeEpoch::from_jd(JD2000 + 4.0 * DAYS_PER_YEAR).unwrap();
        let far = TimeEpoch::from_jd(JD2000 + 6.0 * DAYS_PER_YEAR).unwrap();
        assert!(!curve.is_stale(&near));
        assert!(curve.is_stale(&far));
    }
}
