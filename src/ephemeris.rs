//! # Top-level ephemeris API
//!
//! Convenience entry points over the two planetary position paths:
//!
//! - [`position`] — the periodic-expansion tables, the high-precision path,
//!   available for all nine bodies;
//! - [`mean_position`] — the classical mean-element path, available for the
//!   six bodies of the element tables; less precise, but the only path that
//!   also describes the orbit itself (see
//!   [`MeanElements`](crate::planets::MeanElements) and
//!   [`OrbitCurve`](crate::orbit_curve::OrbitCurve)).
//!
//! Both return heliocentric ecliptic Cartesian coordinates in AU. Comet
//! positions live on [`CometElements`](crate::comet::CometElements).

use nalgebra::Vector3;

use crate::astro_time::TimeEpoch;
use crate::errors::OrreryError;
use crate::planets::{MeanElements, Planet};
use crate::series::series_position;

/// Heliocentric ecliptic position of `planet` at `epoch`, in AU.
pub fn position(planet: Planet, epoch: &TimeEpoch) -> Vector3<f64> {
    series_position(planet, epoch)
}

/// Mean-element position of `planet` at `epoch`, in AU.
///
/// Covers Mercury through Saturn; the trans-Saturnian bodies return
/// [`OrreryError::UnsupportedBody`].
pub fn mean_position(planet: Planet, epoch: &TimeEpoch) -> Result<Vector3<f64>, OrreryError> {
    MeanElements::for_planet(planet, epoch)?.position()
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;
    use crate::constants::JD2000;

    #[test]
    fn test_paths_agree_for_inner_planets() {
        let epoch = TimeEpoch::from_jd(JD2000).unwrap();
        for (planet, tol) in [
            (Planet::Mercury, 0.01),
            (Planet::Venus, 0.02),
            (Planet::Earth, 0.02),
            (Planet::Mars, 0.05),
        ] {
            let series = position(planet, &epoch);
            let mean = mean_position(planet, &epoch).unwrap();
            let gap = (series - mean).norm();
            assert!(gap < tol, "{planet:?}: paths {gap} AU apart");
        }
    }

    #[test]
    fn test_paths_agree_for_giants() {
        // the giants carry interpolated perturbations; agreement is coarser
        let epoch = TimeEpoch::from_jd(JD2000).unwrap();
        for planet in [Planet::Jupiter, Planet::Saturn] {
            let series = position(planet, &epoch);
            let mean = mean_position(planet, &epoch).unwrap();
            let gap = (series - mean).norm();
            assert!(gap < 0.5, "{planet:?}: paths {gap} AU apart");
        }
    }

    #[test]
    fn test_mean_position_rejects_distant_bodies() {
        let epoch = TimeEpoch::from_jd(JD2000).unwrap();
        assert!(matches!(
            mean_position(Planet::Neptune, &epoch),
            Err(OrreryError::UnsupportedBody { .. })
        ));
    }
}
