//! # Planetary mean elements
//!
//! This module provides the **body selector** used across the crate and the
//! **classical mean-element tables** (Newcomb/Leverrier polynomials, 1900-based)
//! for the six planets whose orbits the tables cover.
//!
//! ## Overview
//!
//! - [`Planet`] — exhaustive body enum, replacing integer selectors; bodies a
//!   table does not cover are rejected with [`OrreryError::UnsupportedBody`].
//! - [`MeanElements`] — osculating mean elements at an epoch, with the
//!   great-inequality perturbation corrections applied to Jupiter and Saturn
//!   through precomputed interpolation grids.
//! - [`MeanElements::position`] — heliocentric ecliptic position of the body,
//!   suitable for drawing the orbit the body actually follows.
//!
//! The high-precision positions come from the periodic expansions in
//! [`crate::series`]; the mean elements exist to describe the *orbit* (shape
//! and orientation), which the series do not expose.

use std::sync::LazyLock;

use nalgebra::Vector3;

use crate::astro_time::TimeEpoch;
use crate::constants::{cos_deg, normalize_deg, sin_deg, AstronomicalUnit, Degree, RADEG};
use crate::errors::OrreryError;
use crate::kepler::solve_elliptic_deg;

/// The nine classical bodies of the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    /// All bodies, in heliocentric distance order.
    pub const ALL: [Planet; 9] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];
}

// -------------------------------------------------------------------------------------------------
// Great-inequality perturbation grids
// -------------------------------------------------------------------------------------------------
//
// The Jupiter and Saturn mean elements carry large mutual perturbations keyed
// by the two mean longitudes P (Jupiter) and Q (Saturn). Rather than evaluate
// the full trigonometric series on every call, the corrections are sampled
// once on a 30-degree grid over (P, Q) and interpolated bilinearly. Row and
// column 12 duplicate the 0-degree wrap so the interpolation never reads past
// the table.

const GRID_SIZE: usize = 13;
const GRID_STEP: Degree = 30.0;

struct PerturbationGrid {
    delta_longitude: [[f64; GRID_SIZE]; GRID_SIZE],
    delta_eccentricity: [[f64; GRID_SIZE]; GRID_SIZE],
}

impl PerturbationGrid {
    fn build(
        longitude_term: impl Fn(Degree, Degree) -> f64,
        eccentricity_term: impl Fn(Degree, Degree) -> f64,
    ) -> Self {
        let mut delta_longitude = [[0.0; GRID_SIZE]; GRID_SIZE];
        let mut delta_eccentricity = [[0.0; GRID_SIZE]; GRID_SIZE];
        for (i, row_l) in delta_longitude.iter_mut().enumerate() {
            let p = i as f64 * GRID_STEP;
            for (j, cell) in row_l.iter_mut().enumerate() {
                let q = j as f64 * GRID_STEP;
                *cell = longitude_term(p, q);
                delta_eccentricity[i][j] = eccentricity_term(p, q);
            }
        }
        PerturbationGrid {
            delta_longitude,
            delta_eccentricity,
        }
    }

    /// Bilinear interpolation over the grid; indices past the wrap row are held.
    fn lookup(table: &[[f64; GRID_SIZE]; GRID_SIZE], p: Degree, q: Degree) -> f64 {
        let pn = normalize_deg(p) / GRID_STEP;
        let qn = normalize_deg(q) / GRID_STEP;
        let i = (pn.floor() as usize).min(GRID_SIZE - 2);
        let j = (qn.floor() as usize).min(GRID_SIZE - 2);
        let fp = (pn - i as f64).min(1.0);
        let fq = (qn - j as f64).min(1.0);
        let top = table[i][j] * (1.0 - fq) + table[i][j + 1] * fq;
        let bottom = table[i + 1][j] * (1.0 - fq) + table[i + 1][j + 1] * fq;
        top * (1.0 - fp) + bottom * fp
    }

    fn longitude(&self, p: Degree, q: Degree) -> Degree {
        Self::lookup(&self.delta_longitude, p, q)
    }

    fn eccentricity(&self, p: Degree, q: Degree) -> f64 {
        Self::lookup(&self.delta_eccentricity, p, q)
    }
}

// Secular argument of the classical series, frozen at its epoch value; the
// grids absorb only the periodic (P, Q) structure.
const NU: f64 = 0.1;

fn jupiter_delta_longitude(p: Degree, q: Degree) -> Degree {
    let v = 5.0 * q - 2.0 * p;
    let zeta = q - p;
    (0.331364 - 0.010281 * NU - 0.004692 * NU * NU) * sin_deg(v)
        + (0.003228 - 0.064436 * NU + 0.002075 * NU * NU) * cos_deg(v)
        - (0.003083 + 0.000275 * NU - 0.000489 * NU * NU) * sin_deg(2.0 * v)
        + 0.013619 * sin_deg(zeta)
        + 0.018472 * sin_deg(2.0 * zeta)
        + 0.006717 * sin_deg(3.0 * zeta)
        + 0.002775 * sin_deg(4.0 * zeta)
        + (0.007275 - 0.001253 * NU) * sin_deg(zeta) * sin_deg(q)
        + 0.006417 * sin_deg(2.0 * zeta) * sin_deg(q)
        + 0.002439 * sin_deg(3.0 * zeta) * sin_deg(q)
        - (0.033839 + 0.001125 * NU) * cos_deg(zeta) * sin_deg(q)
        - 0.003767 * cos_deg(2.0 * zeta) * sin_deg(q)
        - (0.035681 + 0.001208 * NU) * sin_deg(zeta) * cos_deg(q)
        - 0.004261 * sin_deg(2.0 * zeta) * cos_deg(q)
        + 0.002178 * cos_deg(q)
        + (-0.006333 + 0.001161 * NU) * cos_deg(zeta) * cos_deg(q)
        - 0.006675 * cos_deg(2.0 * zeta) * cos_deg(q)
        - 0.002664 * cos_deg(3.0 * zeta) * cos_deg(q)
        - 0.002572 * sin_deg(zeta) * sin_deg(2.0 * q)
        - 0.003567 * sin_deg(2.0 * zeta) * sin_deg(2.0 * q)
        + 0.002094 * cos_deg(zeta) * cos_deg(2.0 * q)
        + 0.003342 * cos_deg(2.0 * zeta) * cos_deg(2.0 * q)
}

fn jupiter_delta_eccentricity(p: Degree, q: Degree) -> f64 {
    let v = 5.0 * q - 2.0 * p;
    let zeta = q - p;
    ((3606.0 + 130.0 * NU - 43.0 * NU * NU) * sin_deg(v)
        + (1289.0 - 580.0 * NU) * cos_deg(v)
        - 6764.0 * sin_deg(zeta) * sin_deg(q)
        - 1110.0 * sin_deg(2.0 * zeta) * sin_deg(q)
        - 224.0 * sin_deg(3.0 * zeta) * sin_deg(q)
        - 204.0 * sin_deg(q)
        + (1284.0 + 116.0 * NU) * cos_deg(zeta) * sin_deg(q)
        + 188.0 * cos_deg(2.0 * zeta) * sin_deg(q)
        + (1460.0 + 130.0 * NU) * sin_deg(zeta) * cos_deg(q)
        + 224.0 * sin_deg(2.0 * zeta) * cos_deg(q)
        - 817.0 * cos_deg(q)
        + 6074.0 * cos_deg(zeta) * cos_deg(q)
        + 992.0 * cos_deg(2.0 * zeta) * cos_deg(q)
        + 508.0 * cos_deg(3.0 * zeta) * cos_deg(q)
        + 230.0 * cos_deg(4.0 * zeta) * cos_deg(q)
        + 108.0 * cos_deg(5.0 * zeta) * cos_deg(q))
        * 1.0e-7
}

fn saturn_delta_longitude(p: Degree, q: Degree) -> Degree {
    let v = 5.0 * q - 2.0 * p;
    let zeta = q - p;
    (-0.814181 + 0.018150 * NU + 0.016714 * NU * NU) * sin_deg(v)
        + (-0.010497 + 0.160906 * NU - 0.004100 * NU * NU) * cos_deg(v)
        + 0.007581 * sin_deg(2.0 * v)
        - 0.148811 * sin_deg(zeta)
        - 0.040786 * sin_deg(2.0 * zeta)
        - 0.015208 * sin_deg(3.0 * zeta)
        - 0.006339 * sin_deg(4.0 * zeta)
        - 0.006244 * sin_deg(q)
        + (0.008931 + 0.002728 * NU) * sin_deg(zeta) * sin_deg(q)
        - 0.016500 * sin_deg(2.0 * zeta) * sin_deg(q)
        - 0.005775 * sin_deg(3.0 * zeta) * sin_deg(q)
        + (0.081344 + 0.003206 * NU) * cos_deg(zeta) * sin_deg(q)
        + 0.015019 * cos_deg(2.0 * zeta) * sin_deg(q)
        + (0.085581 + 0.002494 * NU) * sin_deg(zeta) * cos_deg(q)
        + (0.025328 - 0.003117 * NU) * cos_deg(zeta) * cos_deg(q)
        + 0.014394 * cos_deg(2.0 * zeta) * cos_deg(q)
        + 0.006319 * cos_deg(3.0 * zeta) * cos_deg(q)
}

fn saturn_delta_eccentricity(p: Degree, q: Degree) -> f64 {
    let v = 5.0 * q - 2.0 * p;
    ((-7927.0 + 2548.0 * NU + 91.0 * NU * NU) * sin_deg(v)
        + (13381.0 + 1226.0 * NU - 253.0 * NU * NU) * cos_deg(v)
        + 12415.0 * sin_deg(q)
        + 26599.0 * cos_deg(q - p) * sin_deg(q)
        - 4687.0 * cos_deg(2.0 * (q - p)) * sin_deg(q))
        * 1.0e-7
}

static JUPITER_GRID: LazyLock<PerturbationGrid> = LazyLock::new(|| {
    PerturbationGrid::build(jupiter_delta_longitude, jupiter_delta_eccentricity)
});

static SATURN_GRID: LazyLock<PerturbationGrid> = LazyLock::new(|| {
    PerturbationGrid::build(saturn_delta_longitude, saturn_delta_eccentricity)
});

// -------------------------------------------------------------------------------------------------
// Mean elements
// -------------------------------------------------------------------------------------------------

/// Mean orbital elements of a planet at an epoch.
///
/// Angles are stored in degrees, matching the polynomial tables; conversion to
/// radians happens only inside [`MeanElements::position`]. Jupiter and Saturn
/// arrive with their great-inequality corrections already folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanElements {
    pub planet: Planet,
    /// Julian day the elements were evaluated at.
    pub epoch_jd: crate::constants::JulianDay,
    /// Mean longitude L.
    pub longitude: Degree,
    /// Longitude of perihelion.
    pub perihelion: Degree,
    /// Longitude of the ascending node.
    pub node: Degree,
    pub inclination: Degree,
    pub eccentricity: f64,
    pub semi_major_axis: AstronomicalUnit,
}

/// Cubic evaluation for the element polynomials, T in Julian centuries from 1900.
#[inline]
fn poly3(t: f64, c0: f64, c1: f64, c2: f64, c3: f64) -> f64 {
    c0 + t * (c1 + t * (c2 + t * c3))
}

impl MeanElements {
    /// Mean elements of `planet` at `epoch`.
    ///
    /// Only the six bodies of the classical tables are covered; the trans-Saturnian
    /// planets answer with [`OrreryError::UnsupportedBody`].
    pub fn for_planet(planet: Planet, epoch: &TimeEpoch) -> Result<MeanElements, OrreryError> {
        let t = epoch.century_fraction_1900();
        let mut elements = match planet {
            Planet::Mercury => MeanElements {
                planet,
                epoch_jd: epoch.julian_day(),
                longitude: poly3(t, 178.179078, 149474.07078, 0.0003011, 0.0),
                perihelion: poly3(t, 75.899697, 1.5554889, 0.0002947, 0.0),
                node: poly3(t, 47.145944, 1.1852083, 0.0001739, 0.0),
                inclination: poly3(t, 7.002881, 0.0018608, -0.0000183, 0.0),
                eccentricity: poly3(t, 0.20561421, 0.00002046, -0.00000003, 0.0),
                semi_major_axis: 0.3870986,
            },
            Planet::Venus => MeanElements {
                planet,
                epoch_jd: epoch.julian_day(),
                longitude: poly3(t, 342.767053, 58519.21191, 0.0003097, 0.0),
                perihelion: poly3(t, 130.163833, 1.4080361, -0.0009764, 0.0),
                node: poly3(t, 75.779647, 0.8998500, 0.0004100, 0.0),
                inclination: poly3(t, 3.393631, 0.0010058, -0.0000010, 0.0),
                eccentricity: poly3(t, 0.00682069, -0.00004774, 0.000000091, 0.0),
                semi_major_axis: 0.7233316,
            },
            Planet::Earth => MeanElements {
                planet,
                epoch_jd: epoch.julian_day(),
                longitude: poly3(t, 99.69668, 36000.76892, 0.0003025, 0.0),
                perihelion: poly3(t, 101.220833, 1.7191750, 0.00045278, 0.0),
                node: 0.0,
                inclination: 0.0,
                eccentricity: poly3(t, 0.01675104, -0.0000418, -0.000000126, 0.0),
                semi_major_axis: 1.0000002,
            },
            Planet::Mars => MeanElements {
                planet,
                epoch_jd: epoch.julian_day(),
                longitude: poly3(t, 293.737334, 19141.69551, 0.0003107, 0.0),
                perihelion: poly3(t, 334.218203, 1.8407584, 0.0001299, -0.00000119),
                node: poly3(t, 48.786442, 0.7709917, -0.0000014, -0.00000533),
                inclination: poly3(t, 1.850333, -0.0006750, 0.0000126, 0.0),
                eccentricity: poly3(t, 0.09331290, 0.000092064, -0.000000077, 0.0),
                semi_major_axis: 1.5236883,
            },
            Planet::Jupiter => MeanElements {
                planet,
                epoch_jd: epoch.julian_day(),
                longitude: poly3(t, 238.049257, 3036.301986, 0.0003347, -0.00000165),
                perihelion: poly3(t, 12.720972, 1.6099617, 0.00105627, -0.00000343),
                node: poly3(t, 99.443414, 1.0105300, 0.00035222, -0.00000851),
                inclination: poly3(t, 1.308736, -0.0056961, 0.0000039, 0.0),
                eccentricity: poly3(t, 0.04833475, 0.00016418, -0.0000004676, -0.0000000017),
                semi_major_axis: 5.202561,
            },
            Planet::Saturn => MeanElements {
                planet,
                epoch_jd: epoch.julian_day(),
                longitude: poly3(t, 266.564377, 1223.509884, 0.0003245, -0.0000058),
                perihelion: poly3(t, 91.098214, 1.9584158, 0.00082636, 0.00000461),
                node: poly3(t, 112.790414, 0.8731951, -0.00015218, -0.00000531),
                inclination: poly3(t, 2.492519, -0.0039189, -0.00001549, 0.00000004),
                eccentricity: poly3(t, 0.05589232, -0.00034550, -0.000000728, 0.00000000074),
                semi_major_axis: 9.554747,
            },
            Planet::Uranus | Planet::Neptune | Planet::Pluto => {
                return Err(OrreryError::UnsupportedBody {
                    planet,
                    operation: "mean elements",
                })
            }
        };

        if matches!(planet, Planet::Jupiter | Planet::Saturn) {
            let p = normalize_deg(237.47555 + 3034.9061 * t);
            let q = normalize_deg(265.91650 + 1222.1139 * t);
            let grid: &PerturbationGrid = match planet {
                Planet::Jupiter => &JUPITER_GRID,
                _ => &SATURN_GRID,
            };
            elements.longitude += grid.longitude(p, q);
            elements.eccentricity += grid.eccentricity(p, q);
        }

        elements.longitude = normalize_deg(elements.longitude);
        elements.perihelion = normalize_deg(elements.perihelion);
        elements.node = normalize_deg(elements.node);
        Ok(elements)
    }

    /// Heliocentric ecliptic position of the body, in AU.
    pub fn position(&self) -> Result<Vector3<f64>, OrreryError> {
        let mean_anomaly = normalize_deg(self.longitude - self.perihelion);
        let ecc_anomaly = solve_elliptic_deg(mean_anomaly, self.eccentricity)?;

        let r_cos_v = self.semi_major_axis * (cos_deg(ecc_anomaly) - self.eccentricity);
        let r_sin_v = self.semi_major_axis
            * (1.0 - self.eccentricity * self.eccentricity).sqrt()
            * sin_deg(ecc_anomaly);

        // argument of perihelion and node, radians
        let peri = (self.perihelion - self.node) * RADEG;
        let node = self.node * RADEG;
        let incl = self.inclination * RADEG;

        let (sin_p, cos_p) = peri.sin_cos();
        let (sin_n, cos_n) = node.sin_cos();
        let (sin_i, cos_i) = incl.sin_cos();

        let x = r_cos_v * (cos_p * cos_n - sin_p * cos_i * sin_n)
            - r_sin_v * (sin_p * cos_n + cos_p * cos_i * sin_n);
        let y = r_cos_v * (cos_p * sin_n + sin_p * cos_i * cos_n)
            - r_sin_v * (sin_p * sin_n - cos_p * cos_i * cos_n);
        let z = r_cos_v * sin_p * sin_i + r_sin_v * cos_p * sin_i;

        Ok(Vector3::new(x, y, z))
    }

    pub fn perihelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn aphelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

#[cfg(test)]
mod planets_test {
    use super::*;
    use approx::assert_relative_eq;

    const MEAN_BODIES: [Planet; 6] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    fn j2000() -> TimeEpoch {
        TimeEpoch::from_jd(crate::constants::JD2000).unwrap()
    }

    #[test]
    fn test_radius_within_orbit_bounds() {
        let epoch = j2000();
        for planet in MEAN_BODIES {
            let elements = MeanElements::for_planet(planet, &epoch).unwrap();
            let r = elements.position().unwrap().norm();
            assert!(
                r >= elements.perihelion_distance() - 1e-9
                    && r <= elements.aphelion_distance() + 1e-9,
                "{planet:?}: r = {r}"
            );
        }
    }

    #[test]
    fn test_earth_radius_near_one_au() {
        let elements = MeanElements::for_planet(Planet::Earth, &j2000()).unwrap();
        let r = elements.position().unwrap().norm();
        assert!((r - 1.0).abs() < 0.02, "r = {r}");
    }

    #[test]
    fn test_earth_orbit_is_ecliptic() {
        let elements = MeanElements::for_planet(Planet::Earth, &j2000()).unwrap();
        assert_eq!(elements.inclination, 0.0);
        assert_relative_eq!(elements.position().unwrap().z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mercury_inclination() {
        let elements = MeanElements::for_planet(Planet::Mercury, &j2000()).unwrap();
        assert!((elements.inclination - 7.0).abs() < 0.01);
        assert!((elements.eccentricity - 0.2056).abs() < 0.001);
    }

    #[test]
    fn test_outer_bodies_unsupported() {
        let epoch = j2000();
        for planet in [Planet::Uranus, Planet::Neptune, Planet::Pluto] {
            let err = MeanElements::for_planet(planet, &epoch).unwrap_err();
            assert_eq!(
                err,
                OrreryError::UnsupportedBody {
                    planet,
                    operation: "mean elements",
                }
            );
        }
    }

    #[test]
    fn test_perturbation_grid_wraps() {
        // the wrap row duplicates row zero, so a lookup just under 360 degrees
        // matches the lookup at zero
        let near = JUPITER_GRID.longitude(359.9999, 123.0);
        let zero = JUPITER_GRID.longitude(0.0, 123.0);
        assert_relative_eq!(near, zero, epsilon = 1e-4);
    }

    #[test]
    fn test_perturbation_magnitudes() {
        for i in 0..12 {
            for j in 0..12 {
                let p = i as f64 * 30.0 + 11.0;
                let q = j as f64 * 30.0 + 17.0;
                assert!(JUPITER_GRID.longitude(p, q).abs() < 1.0);
                assert!(SATURN_GRID.longitude(p, q).abs() < 1.5);
                assert!(JUPITER_GRID.eccentricity(p, q).abs() < 0.01);
                assert!(SATURN_GRID.eccentricity(p, q).abs() < 0.01);
            }
        }
    }

    #[test]
    fn test_grid_matches_series_on_nodes() {
        // on an exact grid node interpolation degenerates to the sampled value
        let p = 90.0;
        let q = 210.0;
        assert_relative_eq!(
            JUPITER_GRID.longitude(p, q),
            jupiter_delta_longitude(p, q),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            SATURN_GRID.eccentricity(p, q),
            saturn_delta_eccentricity(p, q),
            epsilon = 1e-12
        );
    }
}
