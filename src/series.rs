//! # Periodic-expansion planetary positions
//!
//! High-precision heliocentric positions from trigonometric expansions of each
//! planet's ecliptic longitude, latitude and radius. The nine bodies fall into
//! four formula families that share nothing but the spherical assembly step:
//!
//! - **solar family** — Earth, as the negated geocentric Sun vector, with a
//!   log10 radius series;
//! - **inner family** — Venus and Mars, two-stage longitude (`l0 + l1`) with
//!   the `l1` correction feeding back into both the main longitude term and
//!   the latitude argument;
//! - **giant family** — Jupiter and Saturn, a perturbed mean anomaly `N`, an
//!   equation-of-center expansion to 4th order, and a conic radius factor;
//! - **distant family** — Mercury, Uranus, Neptune, Pluto, plain cosine series
//!   over the J2000 century fraction.
//!
//! The families use two different time arguments: the first three take Julian
//! years from [`JD_SERIES_EPOCH`](crate::constants::JD_SERIES_EPOCH), the
//! distant family Julian centuries from J2000. The grouping is load-bearing;
//! do not merge the families.
//!
//! Coefficient tables are reproduced from the classical expansion listings,
//! including their historical irregularities.

use nalgebra::Vector3;

use crate::astro_time::TimeEpoch;
use crate::constants::{cos_deg, normalize_deg, sin_deg, Radian, RADEG};
use crate::planets::Planet;

/// One periodic term. The meaning of `b` and `c` depends on the family:
/// the yearly families evaluate `a·trig(b + c·t)`, the distant family
/// `a·cos(b·t + c)`.
struct Term {
    a: f64,
    b: f64,
    c: f64,
}

const fn t(a: f64, b: f64, c: f64) -> Term {
    Term { a, b, c }
}

#[inline]
fn sum_sin(terms: &[Term], time: f64) -> f64 {
    terms.iter().map(|p| p.a * sin_deg(p.b + p.c * time)).sum()
}

#[inline]
fn sum_cos(terms: &[Term], time: f64) -> f64 {
    terms.iter().map(|p| p.a * cos_deg(p.b + p.c * time)).sum()
}

/// Distant-family accumulation, argument `b·t + c`.
#[inline]
fn sum_cos_t(terms: &[Term], time: f64) -> f64 {
    terms.iter().map(|p| p.a * cos_deg(p.b * time + p.c)).sum()
}

/// Ecliptic spherical → heliocentric Cartesian (AU).
#[inline]
fn spherical_to_cartesian(radius: f64, beta: Radian, lambda: Radian) -> Vector3<f64> {
    Vector3::new(
        radius * beta.cos() * lambda.cos(),
        radius * beta.cos() * lambda.sin(),
        radius * beta.sin(),
    )
}

// -------------------------------------------------------------------------------------------------
// Solar family: Earth
// -------------------------------------------------------------------------------------------------

const SUN_LAMBDA: [Term; 18] = [
    t(0.0200, 353.06, 719.981),
    t(-0.0048, 248.64, -19.341),
    t(0.0020, 285.0, 329.64),
    t(0.0018, 334.2, -4452.67),
    t(0.0018, 293.7, -0.20),
    t(0.0015, 242.4, 450.37),
    t(0.0013, 211.1, 225.18),
    t(0.0008, 208.0, 659.29),
    t(0.0007, 53.5, 90.38),
    t(0.0007, 12.1, -30.35),
    t(0.0006, 239.1, 337.18),
    t(0.0005, 10.1, -1.50),
    t(0.0005, 99.1, -22.81),
    t(0.0004, 264.8, 315.56),
    t(0.0004, 233.8, 299.30),
    t(-0.0004, 198.1, 720.02),
    t(0.0003, 349.6, 1079.97),
    t(0.0003, 241.2, -44.43),
];

const SUN_Q: [Term; 4] = [
    t(-0.000091, 353.1, 719.98),
    t(0.000013, 205.8, 4452.67),
    t(0.000007, 62.0, 450.4),
    t(0.000007, 105.0, 329.6),
];

/// Earth position as the negated geocentric Sun vector.
fn solar_series(time: f64) -> Vector3<f64> {
    let mut lambda = 279.0358
        + 360.00769 * time
        + (1.9159 - 0.00005 * time) * sin_deg(356.531 + 359.991 * time);
    lambda += sum_sin(&SUN_LAMBDA, time);
    lambda += 0.0057;
    let lambda = normalize_deg(lambda) * RADEG;

    let mut q = (-0.007261 + 0.0000002 * time) * cos_deg(356.53 + 359.991 * time) + 0.000030;
    // historical listing: the phase doubles as the rate in this series
    for term in &SUN_Q {
        q += term.a * cos_deg(term.b + term.b * time);
    }
    let radius = 10f64.powf(q);

    -spherical_to_cartesian(radius, 0.0, lambda)
}

// -------------------------------------------------------------------------------------------------
// Inner family: Venus, Mars
// -------------------------------------------------------------------------------------------------

/// Scalar pack of the inner family: longitude base/correction, latitude, log-radius.
struct InnerPack {
    l1: f64,
    l2: f64,
    l3: f64,
    l4: f64,
    l5: f64,
    l6: f64,
    l7: f64,
    l8: f64,
    l9: f64,
    b1: f64,
    b2: f64,
    b3: f64,
    q1: f64,
    q2: f64,
    q3: f64,
    q4: f64,
    q5: f64,
}

const VENUS_L0: [Term; 2] = [t(-0.0048, 248.6, -19.34), t(-0.0004, 198.0, 720.0)];
const VENUS_L1: [Term; 4] = [
    t(0.0033, 357.9, 1170.35),
    t(0.0031, 242.3, 450.37),
    t(0.0020, 273.5, 675.55),
    t(0.0014, 31.1, 225.18),
];
const VENUS_Q: [Term; 3] = [
    t(-0.000015, 357.9, 1170.35),
    t(0.000010, 62.3, 450.37),
    t(-0.000008, 93.0, 675.6),
];
const VENUS_P: InnerPack = InnerPack {
    l1: 310.1735,
    l2: 585.19212,
    l3: -0.0503,
    l4: 107.44,
    l5: 1170.37,
    l6: 0.7775,
    l7: -0.00005,
    l8: 178.954,
    l9: 585.178,
    b1: 0.05922,
    b2: 233.72,
    b3: 585.183,
    q1: -0.002947,
    q2: 0.00000021,
    q3: 178.954,
    q4: 585.178,
    q5: -0.140658,
};

const MARS_L0: [Term; 2] = [t(-0.0048, 248.6, -19.34), t(-0.0004, 198.0, 720.0)];
const MARS_L1: [Term; 14] = [
    t(0.6225, 187.54, 382.797),
    t(0.0503, 101.31, 574.196),
    t(0.0146, 62.31, 0.198),
    t(0.0071, 71.8, 161.05),
    t(0.0061, 230.2, 130.71),
    t(0.0046, 15.1, 765.59),
    t(0.0045, 147.5, 322.11),
    t(0.0039, 279.3, -22.81),
    t(0.0024, 207.7, 168.59),
    t(0.0020, 140.1, 145.78),
    t(0.0018, 224.7, 10.98),
    t(0.0014, 221.8, -45.62),
    t(0.0010, 91.4, -30.34),
    t(0.0009, 268.0, 100.4),
];
const MARS_Q: [Term; 8] = [
    t(-0.002825, 187.54, 382.797),
    t(-0.000249, 101.31, 574.196),
    t(-0.000024, 15.1, 765.59),
    t(0.000023, 251.7, 161.05),
    t(0.000022, 327.6, 322.11),
    t(0.000017, 50.2, 130.71),
    t(0.000007, 27.0, 168.6),
    t(0.000006, 320.0, 145.8),
];
const MARS_P: InnerPack = InnerPack {
    l1: 249.3542,
    l2: 191.41696,
    l3: -0.0149,
    l4: 40.01,
    l5: 382.819,
    l6: 10.6886,
    l7: 0.00010,
    l8: 273.768,
    l9: 191.399,
    b1: 0.03227,
    b2: 200.00,
    b3: 191.409,
    q1: -0.040421,
    q2: -0.00000039,
    q3: 273.768,
    q4: 191.399,
    q5: 0.183844,
};

fn inner_series(
    pack: &InnerPack,
    l0_terms: &[Term],
    l1_terms: &[Term],
    q_terms: &[Term],
    time: f64,
) -> Vector3<f64> {
    let mut l1 = (pack.l6 + pack.l7 * time) * sin_deg(pack.l8 + pack.l9 * time);
    l1 += sum_sin(l1_terms, time);

    let mut l0 =
        pack.l1 + pack.l2 * time + pack.l3 * sin_deg(pack.l4 + pack.l5 * time + 2.0 * l1);
    l0 += sum_sin(l0_terms, time);

    let lambda = normalize_deg(l0 + l1) * RADEG;
    let beta = (pack.b1 * sin_deg(pack.b2 + pack.b3 * time + l1)).asin();

    let mut q = (pack.q1 + pack.q2 * time) * cos_deg(pack.q3 + pack.q4 * time) + pack.q5;
    q += sum_cos(q_terms, time);
    let radius = 10f64.powf(q);

    spherical_to_cartesian(radius, beta, lambda)
}

// -------------------------------------------------------------------------------------------------
// Giant family: Jupiter, Saturn
// -------------------------------------------------------------------------------------------------

/// Scalar pack of the giant family: mean longitude drift, long-period term,
/// equation-of-center coefficients, latitude, conic radius.
struct GiantPack {
    l1: f64,
    l2: f64,
    v1: f64,
    v2: f64,
    f1: f64,
    f2: f64,
    f3: f64,
    f4: f64,
    b1: f64,
    b2: f64,
    b3: f64,
    b4: f64,
    b5: f64,
    r1: f64,
    r2: f64,
}

const JUPITER_N: [Term; 23] = [
    t(0.3323, 162.78, 0.385),
    t(0.0541, 38.46, -36.256),
    t(0.0447, 293.42, -29.941),
    t(0.0342, 44.50, -5.907),
    t(0.0230, 201.25, -24.035),
    t(0.0222, 109.99, -18.128),
    t(-0.0048, 248.6, -19.34),
    t(0.0047, 184.6, -11.81),
    t(0.0045, 150.1, -54.38),
    t(0.0042, 130.7, -42.16),
    t(0.0039, 7.6, 6.31),
    t(0.0031, 163.2, 12.22),
    t(0.0031, 145.6, 0.77),
    t(0.0024, 191.3, -0.23),
    t(0.0019, 148.4, 24.44),
    t(0.0017, 197.9, -29.941),
    t(0.0010, 307.9, 36.66),
    t(0.0010, 252.6, -72.51),
    t(0.0010, 269.0, -60.29),
    t(0.0010, 278.7, -29.53),
    t(0.0008, 52.0, -66.6),
    t(0.0008, 24.0, -35.8),
    t(0.0005, 356.0, -5.5),
];
const JUPITER_B: [Term; 2] = [t(0.0010, 291.9, -29.94), t(0.0003, 196.0, -24.0)];
const JUPITER_Q: [Term; 16] = [
    t(0.000230, 38.47, -36.256),
    t(0.000168, 293.36, -29.941),
    t(0.000074, 200.50, -24.03),
    t(0.000055, 110.0, -18.13),
    t(0.000038, 39.3, -5.91),
    t(0.000024, 150.9, -54.38),
    t(0.000023, 336.4, 0.41),
    t(0.000019, 131.7, -42.16),
    t(0.000009, 180.0, -11.8),
    t(0.000007, 277.0, -60.3),
    t(0.000006, 330.0, 24.4),
    t(0.000006, 53.0, -66.6),
    t(0.000006, 188.0, 6.3),
    t(0.000006, 251.0, -72.5),
    t(0.000006, 198.0, -29.9),
    t(0.000005, 353.5, 12.22),
];
const JUPITER_P: GiantPack = GiantPack {
    l1: 13.6526,
    l2: 0.01396,
    v1: 0.0075,
    v2: 5.94,
    f1: 5.5280,
    f2: 0.1666,
    f3: 0.0070,
    f4: 0.0003,
    b1: 0.022889,
    b2: 272.975,
    b3: 0.0128,
    b4: 0.00010,
    b5: 35.52,
    r1: 5.190688,
    r2: 0.048254,
};

const SATURN_N: [Term; 21] = [
    t(0.8081, 342.74, 0.385),
    t(0.1900, 3.57, -11.813),
    t(0.1173, 224.52, -5.907),
    t(0.0093, 176.6, 6.31),
    t(0.0089, 218.5, -36.26),
    t(0.0080, 10.4, -0.23),
    t(0.0078, 56.8, 0.63),
    t(0.0074, 325.4, 0.77),
    t(0.0073, 209.4, -24.03),
    t(0.0064, 202.0, -11.59),
    t(-0.0048, 248.6, -19.34),
    t(0.0034, 105.2, -30.35),
    t(0.0034, 23.6, -15.87),
    t(0.0025, 348.4, -11.41),
    t(0.0022, 102.5, -7.94),
    t(0.0021, 53.5, -3.65),
    t(0.0020, 220.4, -18.13),
    t(0.0018, 326.7, -54.38),
    t(0.0017, 173.0, -5.50),
    t(0.0014, 165.5, -5.91),
    t(0.0013, 307.9, -42.16),
];
const SATURN_B: [Term; 3] = [
    t(0.0024, 3.9, -11.81),
    t(0.0008, 269.0, -5.9),
    t(0.0005, 135.0, -30.3),
];
const SATURN_Q: [Term; 19] = [
    t(0.000701, 3.43, -11.813),
    t(0.000378, 110.54, -18.128),
    t(0.000244, 219.13, -5.907),
    t(0.000114, 158.22, 0.383),
    t(0.000064, 218.1, -36.26),
    t(0.000042, 215.8, -24.03),
    t(0.000024, 201.8, -11.59),
    t(0.000024, 1.3, 6.31),
    t(0.000019, 307.7, 12.22),
    t(0.000015, 326.3, -54.38),
    t(0.000010, 311.1, -42.16),
    t(0.000010, 83.2, 24.44),
    t(0.000009, 348.0, -11.4),
    t(0.000008, 129.0, -30.3),
    t(0.000006, 295.0, -29.9),
    t(0.000006, 148.0, -48.5),
    t(0.000006, 103.0, -7.9),
    t(0.000005, 318.0, 24.4),
    t(0.000005, 24.0, -15.9),
];
const SATURN_P: GiantPack = GiantPack {
    l1: 91.8560,
    l2: 0.01396,
    v1: 0.0272,
    v2: 135.53,
    f1: 6.4215,
    f2: 0.2248,
    f3: 0.0109,
    f4: 0.0006,
    b1: 0.043519,
    b2: 337.763,
    b3: 0.0286,
    b4: 0.00023,
    b5: 77.06,
    r1: 9.508863,
    r2: 0.056061,
};

fn giant_series(
    pack: &GiantPack,
    n_terms: &[Term],
    b_terms: &[Term],
    q_terms: &[Term],
    n_seed: f64,
    q_seed: f64,
    time: f64,
) -> Vector3<f64> {
    let n = n_seed + sum_sin(n_terms, time);

    // equation of center to 4th order
    let ff = n
        + pack.f1 * sin_deg(n)
        + pack.f2 * sin_deg(2.0 * n)
        + pack.f3 * sin_deg(3.0 * n)
        + pack.f4 * sin_deg(4.0 * n);
    let v = pack.v1 * sin_deg(2.0 * ff + pack.v2);

    let lambda = normalize_deg(ff + v + pack.l1 + pack.l2 * time) * RADEG;

    // the short-period latitude terms are tabulated in radians
    let beta = (pack.b1 * sin_deg(ff + pack.b2)).asin()
        + (pack.b3 + pack.b4 * time) * sin_deg(ff + pack.b5) * RADEG
        + sum_sin(b_terms, time);

    let q = q_seed + sum_cos(q_terms, time);
    let radius = 10f64.powf(q) * pack.r1 / (1.0 + pack.r2 * cos_deg(ff));

    spherical_to_cartesian(radius, beta, lambda)
}

fn jupiter_series(time: f64) -> Vector3<f64> {
    let mut n = 341.5208 + 30.34907 * time;
    n += (0.0350 + 0.00028 * time) * sin_deg(245.94 - 30.349 * time) + 0.0004;
    n -= (0.0019 + 0.00002 * time) * sin_deg(162.78 + 0.38 * time);
    let q = (0.000132 + 0.0000011 * time) * cos_deg(245.93 - 30.349 * time);
    giant_series(&JUPITER_P, &JUPITER_N, &JUPITER_B, &JUPITER_Q, n, q, time)
}

fn saturn_series(time: f64) -> Vector3<f64> {
    let mut n = 12.3042 + 12.22117 * time;
    n += (0.0934 + 0.00075 * time) * sin_deg(250.29 + 12.221 * time) + 0.0008;
    n += (0.0057 + 0.00005 * time) * sin_deg(265.8 - 11.81 * time);
    n += (0.0049 + 0.00004 * time) * sin_deg(162.7 + 0.38 * time);
    n += (0.0019 + 0.00002 * time) * sin_deg(262.0 + 24.44 * time);
    let mut q = (0.000354 + 0.0000028 * time) * cos_deg(70.28 + 12.22 * time) + 0.000183;
    q += (0.000021 + 0.0000002 * time) * cos_deg(265.80 - 11.81 * time);
    giant_series(&SATURN_P, &SATURN_N, &SATURN_B, &SATURN_Q, n, q, time)
}

// -------------------------------------------------------------------------------------------------
// Distant family: Mercury, Uranus, Neptune, Pluto
// -------------------------------------------------------------------------------------------------

const MERCURY_LAMBDA: [Term; 13] = [
    t(0.5258, 448417.55, 74.38),
    t(0.1796, 298945.77, 137.84),
    t(0.1061, 597890.10, 249.2),
    t(0.0850, 149473.3, 143.0),
    t(0.0760, 448418.3, 312.6),
    t(0.0256, 597890.8, 127.4),
    t(0.0230, 747362.6, 64.0),
    t(0.0081, 747363.0, 302.0),
    t(0.0069, 1.0, 148.0),
    t(0.0052, 896835.0, 239.0),
    t(0.0023, 896836.0, 117.0),
    t(0.0019, 6356.0, 85.0),
    t(0.0011, 1046308.0, 54.0),
];
const MERCURY_BETA: [Term; 12] = [
    t(0.3123, 448417.92, 103.51),
    t(0.0753, 597890.4, 278.3),
    t(0.0367, 149472.1, 55.7),
    t(0.0187, 747362.9, 93.1),
    t(0.0050, 298945.0, 230.0),
    t(0.0047, 896835.0, 268.0),
    t(0.0028, 448419.0, 342.0),
    t(0.0023, 298946.0, 347.0),
    t(0.0020, 597891.0, 157.0),
    t(0.0012, 1046308.0, 83.0),
    t(0.0009, 747364.0, 331.0),
    t(0.0009, 448717.0, 45.0),
];
const MERCURY_R: [Term; 4] = [
    t(0.001214, 448417.55, 344.38),
    t(0.000218, 597890.1, 159.20),
    t(0.000042, 747363.0, 334.0),
    t(0.000006, 896835.0, 149.0),
];

const URANUS_LAMBDA: [Term; 9] = [
    t(5.35857, 460.61987, 48.85031),
    t(0.58964, 919.0429, 188.3245),
    t(0.12397, 1065.1192, 354.5935),
    t(0.01475, 2608.702, 351.028),
    t(0.00090, 1968.3, 247.7),
    t(0.00036, 5647.4, 10.4),
    t(0.00017, 2356.6, 183.6),
    t(0.00017, 2873.2, 321.9),
    t(0.00014, 3157.9, 308.1),
];
const URANUS_BETA: [Term; 4] = [
    t(1.15483, 419.91739, 128.15303),
    t(0.67756, 652.9504, 273.6644),
    t(0.13490, 998.0302, 83.3517),
    t(0.00025, 3030.9, 194.2),
];
const URANUS_R: [Term; 7] = [
    t(0.905790, 408.729, 320.313),
    t(0.062710, 799.95, 67.99),
    t(0.004897, 2613.7, 80.4),
    t(0.000656, 1527.0, 202.0),
    t(0.000223, 2120.0, 321.0),
    t(0.000205, 3104.0, 37.0),
    t(0.000120, 5652.0, 100.0),
];

const NEPTUNE_LAMBDA: [Term; 6] = [
    t(0.97450, 221.3904, 167.7269),
    t(0.01344, 986.281, 50.826),
    t(0.00945, 2815.89, 0.09),
    t(0.00235, 2266.50, 309.35),
    t(0.00225, 2279.43, 127.61),
    t(0.00023, 5851.6, 19.2),
];
const NEPTUNE_BETA: [Term; 5] = [
    t(1.76958, 218.87906, 83.11018),
    t(0.01366, 447.128, 338.864),
    t(0.00015, 1107.1, 224.7),
    t(0.00015, 2596.7, 187.5),
    t(0.00012, 3035.0, 243.9),
];
const NEPTUNE_R: [Term; 5] = [
    t(0.260457, 222.371, 79.994),
    t(0.004944, 2815.4, 90.1),
    t(0.003364, 524.0, 308.1),
    t(0.002579, 1025.1, 104.0),
    t(0.000120, 5845.0, 111.0),
];

const PLUTO_LAMBDA: [Term; 8] = [
    t(15.81087, 246.556453, 298.348019),
    t(1.18379, 551.34710, 351.67676),
    t(0.07886, 941.622, 41.989),
    t(0.00861, 2836.46, 60.35),
    t(0.00590, 1306.75, 112.91),
    t(0.00145, 2488.14, 19.01),
    t(0.00022, 5861.8, 77.9),
    t(0.00013, 3288.8, 293.0),
];
const PLUTO_BETA: [Term; 8] = [
    t(17.04550, 172.554318, 42.574982),
    t(2.45310, 415.60630, 66.15350),
    t(0.26775, 713.1227, 105.0840),
    t(0.01855, 1089.202, 146.660),
    t(0.00119, 2658.22, 293.06),
    t(0.00098, 3055.6, 18.8),
    t(0.00090, 1532.6, 213.7),
    t(0.00042, 2342.3, 254.2),
];
const PLUTO_R: [Term; 7] = [
    t(8.670489, 181.3383, 198.4973),
    t(0.333884, 475.963, 228.717),
    t(0.008426, 909.8, 252.9),
    t(0.004902, 2831.6, 149.4),
    t(0.001188, 1748.0, 114.1),
    t(0.000390, 3188.0, 15.0),
    t(0.000116, 5860.0, 169.0),
];

/// Shared tail of the distant family: per-planet bases plus the cosine series.
fn distant_series(
    lambda_base: f64,
    beta_base: f64,
    radius_base: f64,
    lambda_terms: &[Term],
    beta_terms: &[Term],
    radius_terms: &[Term],
    time: f64,
) -> Vector3<f64> {
    let lambda = normalize_deg(lambda_base + sum_cos_t(lambda_terms, time)) * RADEG;
    let beta = (beta_base + sum_cos_t(beta_terms, time)) * RADEG;
    let radius = radius_base + sum_cos_t(radius_terms, time);
    spherical_to_cartesian(radius, beta, lambda)
}

fn mercury_series(time: f64) -> Vector3<f64> {
    let mut lambda = 252.2502 + 149474.0714 * time;
    lambda += (23.4405 + 0.0023 * time) * cos_deg(149472.5153 * time + 84.7947);
    lambda += (2.9818 + 0.0006 * time) * cos_deg(298945.031 * time + 259.589);

    let mut beta = (6.7057 + 0.0017 * time) * cos_deg(149472.886 * time + 113.919);
    beta += (1.4396 + 0.0005 * time) * cos_deg(0.37 * time + 119.12);
    beta += (1.3643 + 0.0005 * time) * cos_deg(298945.40 * time + 288.71);

    let mut radius = 0.395283 + 0.000002 * time;
    radius += (0.078341 + 0.000008 * time) * cos_deg(149472.515 * time + 354.795);
    radius += (0.007955 + 0.000002 * time) * cos_deg(298945.03 * time + 169.59);

    distant_series(lambda, beta, radius, &MERCURY_LAMBDA, &MERCURY_BETA, &MERCURY_R, time)
}

fn uranus_series(time: f64) -> Vector3<f64> {
    let mut lambda = 313.33676 + 428.72880 * time;
    lambda += 3.20671 * time * cos_deg(705.15539 * time + 114.02740);
    lambda += 2.69325 * time * cos_deg(597.77389 * time + 317.76510);
    lambda += 0.00015 * time * cos_deg(3798.6 * time + 313.4);

    let mut beta = -0.02997;
    beta += 1.78488 * time * cos_deg(507.52281 * time + 188.32394);
    beta += 0.56518 * time * cos_deg(892.2869 * time + 354.9571);
    beta += 0.00036 * time * cos_deg(1526.5 * time + 263.0);

    let mut radius = 19.203034 + 0.042617 * time;
    radius += 0.361949 * time * cos_deg(440.702 * time + 19.879);
    radius += 0.166685 * time * cos_deg(702.024 * time + 307.419);

    distant_series(lambda, beta, radius, &URANUS_LAMBDA, &URANUS_BETA, &URANUS_R, time)
}

fn neptune_series(time: f64) -> Vector3<f64> {
    let mut lambda = -55.13323 + 219.93503 * time;
    lambda += 0.04403 * time * cos_deg(684.128 * time + 332.797);
    lambda += 0.02928 * time * cos_deg(904.371 * time + 342.114);

    let beta = 0.01725;

    let mut radius = 30.073033;
    radius += 0.009784 * time * cos_deg(515.2 * time + 195.7);

    distant_series(lambda, beta, radius, &NEPTUNE_LAMBDA, &NEPTUNE_BETA, &NEPTUNE_R, time)
}

fn pluto_series(time: f64) -> Vector3<f64> {
    let lambda = 241.82574 + 179.09519 * time;
    let beta = -2.30285;

    let mut radius = 38.662489;
    radius += 0.007619 * time * cos_deg(1425.9 * time + 31.0);
    radius += 0.002543 * time * cos_deg(2196.1 * time + 199.5);

    distant_series(lambda, beta, radius, &PLUTO_LAMBDA, &PLUTO_BETA, &PLUTO_R, time)
}

// -------------------------------------------------------------------------------------------------
// Dispatch
// -------------------------------------------------------------------------------------------------

/// Heliocentric ecliptic position of `planet` at `epoch`, in AU.
pub fn series_position(planet: Planet, epoch: &TimeEpoch) -> Vector3<f64> {
    match planet {
        Planet::Earth => solar_series(epoch.series_years()),
        Planet::Venus => inner_series(&VENUS_P, &VENUS_L0, &VENUS_L1, &VENUS_Q, epoch.series_years()),
        Planet::Mars => inner_series(&MARS_P, &MARS_L0, &MARS_L1, &MARS_Q, epoch.series_years()),
        Planet::Jupiter => jupiter_series(epoch.series_years()),
        Planet::Saturn => saturn_series(epoch.series_years()),
        Planet::Mercury => mercury_series(epoch.century_fraction()),
        Planet::Uranus => uranus_series(epoch.century_fraction()),
        Planet::Neptune => neptune_series(epoch.century_fraction()),
        Planet::Pluto => pluto_series(epoch.century_fraction()),
    }
}
