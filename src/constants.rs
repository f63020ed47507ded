//! # Constants and type definitions for orrery
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Astronomical constants (Gaussian gravitational constant, reference epochs)
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the time scale, the element
//! tables, the Kepler solvers, and the orbit tessellation.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const JD2000: f64 = 2451545.0;

/// Julian Day of 1900 January 0.5 (1899-12-31 12:00:00 TT), origin of the
/// classical mean-element polynomials
pub const JD1900: f64 = 2415020.0;

/// Julian Day of 1974-12-31 00:00 ET, origin of the periodic expansion tables.
/// The series coefficients are expressed in Julian years elapsed since this epoch.
pub const JD_SERIES_EPOCH: f64 = 2442412.5;

/// Number of days in a Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Gaussian gravitational constant k (radians per day for distances in AU)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// Display clamp applied when tessellating very large orbits: arcs are only
/// sampled inside this heliocentric radius
pub const MAX_ORBIT_RADIUS_AU: f64 = 90.0;

/// Eccentricity band around 1.0 inside which an orbit is treated as parabolic
pub const PARABOLIC_TOLERANCE: f64 = 1.0e-16;

/// Precession polynomials are trusted within this many Julian centuries of J2000;
/// beyond it the angle rates are frozen at the boundary
pub const PRECESSION_LIMIT_CENTURIES: f64 = 30.0;

/// The periodic obliquity formula is used within this many Julian centuries of
/// J2000; beyond it a constant obliquity is substituted
pub const OBLIQUITY_LIMIT_CENTURIES: f64 = 40.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Day (days)
pub type JulianDay = f64;

// -------------------------------------------------------------------------------------------------
// Degree-valued trigonometry helpers
// -------------------------------------------------------------------------------------------------
//
// The element and series tables store their angles in degrees; conversion to radians
// happens exactly once, at these helpers or at an explicit `RADEG` multiplication.

/// Sine of an angle given in degrees.
#[inline]
pub(crate) fn sin_deg(x: Degree) -> f64 {
    (x * RADEG).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub(crate) fn cos_deg(x: Degree) -> f64 {
    (x * RADEG).cos()
}

/// Reduce an angle in degrees to [0, 360).
#[inline]
pub(crate) fn normalize_deg(x: Degree) -> Degree {
    x.rem_euclid(360.0)
}

/// Reduce an angle in radians to [0, 2π).
#[inline]
pub(crate) fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}
