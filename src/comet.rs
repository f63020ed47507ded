//! # Cometary orbits
//!
//! Osculating elements of a comet (or any small body given in cometary form)
//! and its position as a function of time. Unlike the planetary tables, a comet
//! orbit may be elliptic, parabolic or hyperbolic; the conic regime is chosen
//! from the eccentricity at evaluation time and each regime has its own
//! anomaly solver.

use nalgebra::{Matrix3, Vector3};

use crate::astro_time::TimeEpoch;
use crate::constants::{AstronomicalUnit, JulianDay, Radian, GAUSS_GRAV, PARABOLIC_TOLERANCE};
use crate::errors::OrreryError;
use crate::frames::vector_constant;
use crate::kepler::{solve_barker, solve_elliptic, solve_hyperbolic};

/// Conic regime of an orbit, selected from its eccentricity.
///
/// Eccentricities within one part in 10^16 of 1 are treated as parabolic;
/// outside that band the orbit is elliptic below 1 and hyperbolic above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConicRegime {
    Elliptic,
    Parabolic,
    Hyperbolic,
}

/// Osculating cometary elements.
///
/// Angles are stored in radians; the constructor takes catalog degrees. The
/// equinox fixes the reference frame of the angular elements and is kept as a
/// full [`TimeEpoch`] so the frame rotation needs no further validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CometElements {
    eccentricity: f64,
    perihelion_distance: AstronomicalUnit,
    arg_perihelion: Radian,
    node: Radian,
    inclination: Radian,
    equinox: TimeEpoch,
    perihelion_passage: JulianDay,
}

impl CometElements {
    /// Build a validated element set. Angular elements in degrees, as catalogs
    /// list them.
    ///
    /// Rejects non-finite members, `q <= 0` and `e < 0` with
    /// [`OrreryError::InvalidCometElements`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eccentricity: f64,
        perihelion_distance: AstronomicalUnit,
        arg_perihelion_deg: f64,
        node_deg: f64,
        inclination_deg: f64,
        equinox_jd: JulianDay,
        perihelion_passage_jd: JulianDay,
    ) -> Result<CometElements, OrreryError> {
        let members = [
            eccentricity,
            perihelion_distance,
            arg_perihelion_deg,
            node_deg,
            inclination_deg,
            equinox_jd,
            perihelion_passage_jd,
        ];
        if members.iter().any(|v| !v.is_finite()) {
            return Err(OrreryError::InvalidCometElements(
                "non-finite element".into(),
            ));
        }
        if perihelion_distance <= 0.0 {
            return Err(OrreryError::InvalidCometElements(format!(
                "perihelion distance must be positive, got {perihelion_distance}"
            )));
        }
        if eccentricity < 0.0 {
            return Err(OrreryError::InvalidCometElements(format!(
                "eccentricity must be non-negative, got {eccentricity}"
            )));
        }
        Ok(CometElements {
            eccentricity,
            perihelion_distance,
            arg_perihelion: arg_perihelion_deg.to_radians(),
            node: node_deg.to_radians(),
            inclination: inclination_deg.to_radians(),
            equinox: TimeEpoch::from_jd(equinox_jd)?,
            perihelion_passage: perihelion_passage_jd,
        })
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn perihelion_distance(&self) -> AstronomicalUnit {
        self.perihelion_distance
    }

    /// Conic regime of this orbit. [`Self::position`] and the curve
    /// tessellation branch on the same classification.
    pub fn regime(&self) -> ConicRegime {
        if (self.eccentricity - 1.0).abs() <= PARABOLIC_TOLERANCE {
            ConicRegime::Parabolic
        } else if self.eccentricity < 1.0 {
            ConicRegime::Elliptic
        } else {
            ConicRegime::Hyperbolic
        }
    }

    /// Aphelion distance; `None` for open (parabolic/hyperbolic) orbits.
    pub fn aphelion_distance(&self) -> Option<AstronomicalUnit> {
        match self.regime() {
            ConicRegime::Elliptic => {
                let a = self.perihelion_distance / (1.0 - self.eccentricity);
                Some(a * (1.0 + self.eccentricity))
            }
            _ => None,
        }
    }

    pub fn perihelion_passage(&self) -> JulianDay {
        self.perihelion_passage
    }

    pub fn equinox(&self) -> &TimeEpoch {
        &self.equinox
    }

    /// Rotation from the orbital plane into the equatorial frame of the
    /// comet's equinox.
    pub fn vector_constant_matrix(&self) -> Matrix3<f64> {
        vector_constant(self.arg_perihelion, self.node, self.inclination, &self.equinox)
    }

    /// Position in the orbital plane at `jd`, in AU.
    ///
    /// The x axis points at perihelion and z vanishes; apply
    /// [`Self::vector_constant_matrix`] for equatorial coordinates. The conic
    /// regime is selected by the eccentricity, with a band of one part in 10^16
    /// around 1 treated as parabolic.
    pub fn position(&self, jd: JulianDay) -> Result<Vector3<f64>, OrreryError> {
        if !jd.is_finite() {
            return Err(OrreryError::NonFiniteInput("jd"));
        }
        let e = self.eccentricity;
        let q = self.perihelion_distance;
        let dt = jd - self.perihelion_passage;

        let (x, y) = match self.regime() {
            ConicRegime::Parabolic => {
                let n = GAUSS_GRAV * dt / (std::f64::consts::SQRT_2 * q.powf(1.5));
                let s = solve_barker(n);
                (q * (1.0 - s * s), 2.0 * q * s)
            }
            ConicRegime::Elliptic => {
                let a = q / (1.0 - e);
                let m = GAUSS_GRAV * dt / a.powf(1.5);
                let ecc_anomaly = solve_elliptic(m, e)?;
                (
                    a * (ecc_anomaly.cos() - e),
                    a * (1.0 - e * e).sqrt() * ecc_anomaly.sin(),
                )
            }
            ConicRegime::Hyperbolic => {
                let a = q / (e - 1.0);
                let m = GAUSS_GRAV * dt / a.powf(1.5);
                let f = solve_hyperbolic(m, e)?;
                (a * (e - f.cosh()), a * (e * e - 1.0).sqrt() * f.sinh())
            }
        };

        Ok(Vector3::new(x, y, 0.0))
    }

    /// Position in the equatorial frame of the comet's equinox.
    pub fn position_equatorial(&self, jd: JulianDay) -> Result<Vector3<f64>, OrreryError> {
        Ok(self.vector_constant_matrix() * self.position(jd)?)
    }
}

#[cfg(test)]
mod comet_test {
    use super::*;
    use crate::constants::JD2000;
    use approx::assert_relative_eq;

    /// 1P/Halley, 1986 apparition.
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

    #[test]
    fn test_elliptic_at_perihelion() {
        let halley = halley();
        let pos = halley.position(halley.perihelion_passage()).unwrap();
        assert_relative_eq!(pos.norm(), 0.587096, epsilon = 1e-4);
        // perihelion lies on the +x axis of the orbital plane
        assert!(pos.x > 0.0);
        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_elliptic_radius_bounds() {
        let halley = halley();
        let aphelion = halley.aphelion_distance().unwrap();
        assert!((aphelion - 35.3).abs() < 0.2, "aphelion = {aphelion}");
        for days in [0.0, 100.0, 1000.0, 10000.0, -5000.0] {
            let r = halley
                .position(halley.perihelion_passage() + days)
                .unwrap()
                .norm();
            assert!(r >= halley.perihelion_distance() - 1e-9 && r <= aphelion + 1e-9);
        }
    }

    #[test]
    fn test_parabolic_at_perihelion() {
        let comet = CometElements::new(1.0, 0.5, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let pos = comet.position(JD2000).unwrap();
        assert_relative_eq!(pos.norm(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parabolic_symmetric_in_time() {
        let comet = CometElements::new(1.0, 1.2, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let before = comet.position(JD2000 - 40.0).unwrap();
        let after = comet.position(JD2000 + 40.0).unwrap();
        assert_relative_eq!(before.x, after.x, epsilon = 1e-10);
        assert_relative_eq!(before.y, -after.y, epsilon = 1e-10);
    }

    #[test]
    fn test_hyperbolic_at_perihelion() {
        let comet = CometElements::new(1.05, 2.0, 10.0, 20.0, 30.0, JD2000, JD2000).unwrap();
        let pos = comet.position(JD2000).unwrap();
        assert_relative_eq!(pos.norm(), 2.0, epsilon = 1e-9);
        assert!(comet.aphelion_distance().is_none());
    }

    #[test]
    fn test_hyperbolic_recedes() {
        let comet = CometElements::new(1.1, 1.0, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let mut last = comet.position(JD2000).unwrap().norm();
        for k in 1..10 {
            let r = comet.position(JD2000 + k as f64 * 200.0).unwrap().norm();
            assert!(r > last);
            last = r;
        }
    }

    #[test]
    fn test_conic_branches_continuous_at_one() {
        // the three regimes must agree where they meet
        let jd = JD2000 + 50.0;
        let parabolic = CometElements::new(1.0, 0.8, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let elliptic = CometElements::new(0.9999999, 0.8, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let hyperbolic = CometElements::new(1.0000001, 0.8, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let p = parabolic.position(jd).unwrap().norm();
        let e = elliptic.position(jd).unwrap().norm();
        let h = hyperbolic.position(jd).unwrap().norm();
        assert_relative_eq!(p, e, epsilon = 1e-4);
        assert_relative_eq!(p, h, epsilon = 1e-4);
    }

    #[test]
    fn test_regime_at_eccentricity_boundary() {
        // one part in 1e16 around e = 1 stays parabolic; the nearest
        // representable values two ulps away already leave the band
        let with_e =
            |e: f64| CometElements::new(e, 0.8, 0.0, 0.0, 0.0, JD2000, JD2000).unwrap();
        let closed = with_e(1.0 - 2.0e-16);
        let boundary = with_e(1.0);
        let open = with_e(1.0 + 2.0e-16);
        assert_eq!(closed.regime(), ConicRegime::Elliptic);
        assert_eq!(boundary.regime(), ConicRegime::Parabolic);
        assert_eq!(open.regime(), ConicRegime::Hyperbolic);
        // aphelion exists only for the closed regime
        assert!(closed.aphelion_distance().is_some());
        assert!(boundary.aphelion_distance().is_none());
        assert!(open.aphelion_distance().is_none());
    }

    #[test]
    fn test_equatorial_norm_invariant() {
        let halley = halley();
        let jd = halley.perihelion_passage() + 365.0;
        let plane = halley.position(jd).unwrap();
        let equatorial = halley.position_equatorial(jd).unwrap();
        assert_relative_eq!(plane.norm(), equatorial.norm(), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_bad_elements() {
        assert!(matches!(
            CometElements::new(0.5, 0.0, 0.0, 0.0, 0.0, JD2000, JD2000),
            Err(OrreryError::InvalidCometElements(_))
        ));
        assert!(matches!(
            CometElements::new(-0.1, 1.0, 0.0, 0.0, 0.0, JD2000, JD2000),
            Err(OrreryError::InvalidCometElements(_))
        ));
        assert!(matches!(
            CometElements::new(f64::NAN, 1.0, 0.0, 0.0, 0.0, JD2000, JD2000),
            Err(OrreryError::InvalidCometElements(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_jd() {
        let halley = halley();
        assert_eq!(
            halley.position(f64::NAN).unwrap_err(),
            OrreryError::NonFiniteInput("jd")
        );
    }
}
