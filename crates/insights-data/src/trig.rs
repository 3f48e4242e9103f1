//! Platform-independent sine
//!
//! Only IEEE-754 basic operations are used (add, multiply, divide, round),
//! all of which are correctly rounded, so the result is the same on every
//! target. Accuracy is within a few ulp for arguments of moderate size.

// Fused multiply-add rounds once instead of twice and would change results.
#![allow(clippy::suboptimal_flops)]

use std::f64::consts::FRAC_2_PI;

// pi/2 split so that `k * PI_2_HI` is exact for small k. The high part
// keeps 33 significant bits.
const PI_2_HI: f64 = f64::from_bits(0x3FF9_21FB_5440_0000);
const PI_2_LO: f64 = f64::from_bits(0x3DD0_B461_1A62_6331);

const S1: f64 = -1.0 / 6.0;
const S2: f64 = 1.0 / 120.0;
const S3: f64 = -1.0 / 5_040.0;
const S4: f64 = 1.0 / 362_880.0;
const S5: f64 = -1.0 / 39_916_800.0;
const S6: f64 = 1.0 / 6_227_020_800.0;
const S7: f64 = -1.0 / 1_307_674_368_000.0;

const C1: f64 = -1.0 / 2.0;
const C2: f64 = 1.0 / 24.0;
const C3: f64 = -1.0 / 720.0;
const C4: f64 = 1.0 / 40_320.0;
const C5: f64 = -1.0 / 3_628_800.0;
const C6: f64 = 1.0 / 479_001_600.0;
const C7: f64 = -1.0 / 87_178_291_200.0;
const C8: f64 = 1.0 / 20_922_789_888_000.0;

/// Sine on `[-pi/4, pi/4]`
fn kernel_sin(r: f64) -> f64 {
    let r2 = r * r;
    let poly = S1 + r2 * (S2 + r2 * (S3 + r2 * (S4 + r2 * (S5 + r2 * (S6 + r2 * S7)))));
    r + r * r2 * poly
}

/// Cosine on `[-pi/4, pi/4]`
fn kernel_cos(r: f64) -> f64 {
    let r2 = r * r;
    let poly =
        C2 + r2 * (C3 + r2 * (C4 + r2 * (C5 + r2 * (C6 + r2 * (C7 + r2 * C8)))));
    1.0 + r2 * C1 + r2 * r2 * poly
}

/// Deterministic sine of `x` radians
///
/// Returns NaN for non-finite input.
#[must_use]
pub fn sine(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }

    let k = (x * FRAC_2_PI).round();
    let r = (x - k * PI_2_HI) - k * PI_2_LO;

    #[allow(clippy::cast_possible_truncation)]
    let quadrant = (k as i64).rem_euclid(4);

    match quadrant {
        0 => kernel_sin(r),
        1 => kernel_cos(r),
        2 => -kernel_sin(r),
        _ => -kernel_cos(r),
    }
}
