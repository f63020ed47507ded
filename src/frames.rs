//! Reference-frame rotations.
//!
//! All rotations are plain [`nalgebra::Matrix3`] values built by free factory
//! functions. The factories follow the frame-rotation convention of the legacy
//! orbit display (`rotation_x(a)` has `+sin` above the diagonal), so composed
//! call sites read left-to-right with the rightmost rotation applied first.
//!
//! Two astronomical factories sit on top of the axis rotations:
//! [`precession_matrix`] propagates the mean equator between epochs with the
//! Newcomb polynomial fit, and [`vector_constant`] carries orbital-plane
//! coordinates into the equatorial frame of a given equinox.

use nalgebra::Matrix3;

use crate::astro_time::TimeEpoch;
use crate::constants::{
    cos_deg, Degree, JulianDay, Radian, DAYS_PER_CENTURY, JD1900, JD2000,
    OBLIQUITY_LIMIT_CENTURIES, PRECESSION_LIMIT_CENTURIES, RADEG, RADSEC,
};

/// Frame rotation about the X axis.
pub fn rotation_x(angle: Radian) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, s, //
        0.0, -s, c,
    )
}

/// Frame rotation about the Y axis.
pub fn rotation_y(angle: Radian) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, -s, //
        0.0, 1.0, 0.0, //
        s, 0.0, c,
    )
}

/// Frame rotation about the Z axis.
pub fn rotation_z(angle: Radian) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Invert a rotation-derived matrix.
///
/// Every matrix produced by this module is a composition of rotations, so the
/// transpose is the exact inverse. Debug builds assert orthogonality instead of
/// silently corrupting downstream positions with a near-singular cofactor
/// inverse.
pub fn invert_rotation(m: &Matrix3<f64>) -> Matrix3<f64> {
    debug_assert!(
        is_orthogonal(m, 1e-9),
        "invert_rotation called on a non-orthogonal matrix"
    );
    m.transpose()
}

/// True when `m * mᵀ` is the identity within `tol` (element-wise).
pub fn is_orthogonal(m: &Matrix3<f64>, tol: f64) -> bool {
    let prod = m * m.transpose();
    let id: Matrix3<f64> = Matrix3::identity();
    prod.iter()
        .zip(id.iter())
        .all(|(a, b)| (a - b).abs() <= tol)
}

/// Mean obliquity of the ecliptic, in radians.
///
/// `t` is the epoch in Julian centuries from J2000. Within ±40 centuries the
/// model is the legacy 3-term periodic correction; beyond that window a constant
/// value is substituted per side.
pub fn obliquity(t: f64) -> Radian {
    let eps: Degree = if t < -OBLIQUITY_LIMIT_CENTURIES {
        23.83253
    } else if t > OBLIQUITY_LIMIT_CENTURIES {
        23.05253
    } else {
        23.44253 - 0.00013 * t
            + 0.00256 * cos_deg(249.0 - 19.3 * t)
            + 0.00015 * cos_deg(198.0 + 720.0 * t)
    };
    eps * RADEG
}

/// Newcomb precession angles (ζ, z, θ) in arcseconds.
///
/// `t0` is the starting epoch in Julian centuries from 1900.0, `dt` the interval
/// covered, in Julian centuries.
fn newcomb_angles(t0: f64, dt: f64) -> (f64, f64, f64) {
    let zeta = (2304.25 + 1.396 * t0) * dt + 0.302 * dt * dt + 0.018 * dt * dt * dt;
    let z = zeta + 0.791 * dt * dt;
    let theta = (2004.682 - 0.853 * t0) * dt - 0.426 * dt * dt - 0.042 * dt * dt * dt;
    (zeta, z, theta)
}

/// Rates of the Newcomb angles with respect to the interval, arcsec per century.
fn newcomb_rates(t0: f64, dt: f64) -> (f64, f64, f64) {
    let zeta = 2304.25 + 1.396 * t0 + 0.604 * dt + 0.054 * dt * dt;
    let z = zeta + 1.582 * dt;
    let theta = 2004.682 - 0.853 * t0 - 0.852 * dt - 0.126 * dt * dt;
    (zeta, z, theta)
}

/// Precession of the mean equator from `old_epoch` to `new_epoch` (Julian days).
///
/// The Newcomb fit is accurate within ±30 Julian centuries of J2000. When an
/// epoch falls outside that window the angles are extended linearly from the
/// boundary, at the boundary rates. The epoch farther from J2000 is always made
/// the target of the polynomial evaluation; if that required swapping the two
/// epochs, the result is inverted (transposed) before returning, so the matrix
/// always maps old-epoch coordinates to new-epoch coordinates.
///
/// A same-epoch call returns the identity.
pub fn precession_matrix(old_epoch: JulianDay, new_epoch: JulianDay) -> Matrix3<f64> {
    let mut t1 = (old_epoch - JD2000) / DAYS_PER_CENTURY;
    let mut t2 = (new_epoch - JD2000) / DAYS_PER_CENTURY;

    // evaluate toward the epoch farther from J2000
    let swapped = t1.abs() > t2.abs();
    if swapped {
        std::mem::swap(&mut t1, &mut t2);
    }

    let limit = PRECESSION_LIMIT_CENTURIES;
    let clamp = |t: f64| t.clamp(-limit, limit);
    let t1c = clamp(t1);
    let t2c = clamp(t2);

    // 1900-based start epoch for the Newcomb coefficients
    let t0 = t1c + (JD2000 - JD1900) / DAYS_PER_CENTURY;
    let dt = t2c - t1c;

    let (mut zeta, mut z, mut theta) = newcomb_angles(t0, dt);

    // linear extension for the part of the span outside the fit window,
    // anchored at the boundary
    let extra_end = t2 - t2c;
    if extra_end != 0.0 {
        let (rz, rzz, rt) = newcomb_rates(t0, dt);
        zeta += rz * extra_end;
        z += rzz * extra_end;
        theta += rt * extra_end;
    }
    let extra_start = t1c - t1;
    if extra_start != 0.0 {
        let (rz, rzz, rt) = newcomb_rates(t0, 0.0);
        zeta += rz * extra_start;
        z += rzz * extra_start;
        theta += rt * extra_start;
    }

    let mtx = rotation_z(-z * RADSEC) * rotation_y(theta * RADSEC) * rotation_z(-zeta * RADSEC);

    if swapped {
        invert_rotation(&mtx)
    } else {
        mtx
    }
}

/// Rotation taking orbital-plane coordinates (x toward perihelion, z along the
/// orbit normal) into the equatorial frame of `equinox`.
///
/// `arg_peri`, `node` and `incl` are the argument of perihelion, longitude of
/// the ascending node and inclination, in radians. The obliquity applied on top
/// of the orbital-frame rotation follows the piecewise model of [`obliquity`].
pub fn vector_constant(
    arg_peri: Radian,
    node: Radian,
    incl: Radian,
    equinox: &TimeEpoch,
) -> Matrix3<f64> {
    let eps = obliquity(equinox.century_fraction());
    let (sin_eps, cos_eps) = eps.sin_cos();

    let a = orbital_plane_matrix(arg_peri, node, incl);

    // ecliptic -> equatorial tilt folded into the last two rows
    Matrix3::new(
        a[(0, 0)],
        a[(0, 1)],
        a[(0, 2)],
        a[(1, 0)] * cos_eps - a[(2, 0)] * sin_eps,
        a[(1, 1)] * cos_eps - a[(2, 1)] * sin_eps,
        a[(1, 2)] * cos_eps - a[(2, 2)] * sin_eps,
        a[(1, 0)] * sin_eps + a[(2, 0)] * cos_eps,
        a[(1, 1)] * sin_eps + a[(2, 1)] * cos_eps,
        a[(1, 2)] * sin_eps + a[(2, 2)] * cos_eps,
    )
}

/// Rotation taking orbital-plane coordinates into the heliocentric ecliptic
/// frame, without the equatorial tilt of [`vector_constant`].
pub fn orbital_plane_matrix(arg_peri: Radian, node: Radian, incl: Radian) -> Matrix3<f64> {
    let (sin_peri, cos_peri) = arg_peri.sin_cos();
    let (sin_node, cos_node) = node.sin_cos();
    let (sin_incl, cos_incl) = incl.sin_cos();

    Matrix3::new(
        cos_peri * cos_node - sin_peri * cos_incl * sin_node,
        -sin_peri * cos_node - cos_peri * cos_incl * sin_node,
        sin_incl * sin_node,
        cos_peri * sin_node + sin_peri * cos_incl * cos_node,
        -sin_peri * sin_node + cos_peri * cos_incl * cos_node,
        -sin_incl * cos_node,
        sin_peri * sin_incl,
        cos_peri * sin_incl,
        cos_incl,
    )
}
