//! acos(x) via the binomial series for arcsine.
//!
//! ```text
//!                 ( 1 )    x^3     ( 1 * 3 )    x^5    ( 1 * 3 * 5 )    x^7
//! arcsin(x) = x + ----- * -----  + --------- * ----- + ------------- * ----- + ...
//!                 ( 2 )     3      ( 2 * 4 )     5     ( 2 * 4 * 6 )     7
//! ```
//!
//! The series state is carried incrementally in single-precision floats and
//! 32-bit wrapping integers. The power update cubes the running power
//! (x^3, x^9, x^27, ...) rather than stepping through the odd powers, and the
//! integer products wrap long before the clamp; both are kept as-is because
//! the observable outputs are what callers compare against. Absolute error
//! grows quickly outside [-0.5, 0.5].

use core::f64::consts::FRAC_PI_2;

/// Largest number of series rounds `acos_binomial` will run.
///
/// The power of two in the running denominator grows by one per round and
/// reaches 2^32 at the end of round 29, so round 30 divides by zero.
pub const MAX_ROUNDS: i32 = 29;

/// Approximates `acos(x)` with `rounds` series terms beyond the leading `x`.
///
/// `rounds` is clamped to `[0, MAX_ROUNDS]`.
#[inline]
pub fn acos_binomial(x: f32, rounds: i32) -> f32 {
    let rounds = rounds.min(MAX_ROUNDS);
    let a = if rounds > 0 {
        asin_series(x, rounds as u32)
    } else {
        x
    };
    (FRAC_PI_2 - f64::from(a)) as f32
}

/// The raw arcsine series after `rounds` rounds, with no clamp.
///
/// Past `MAX_ROUNDS` the wrapped denominator is zero and the sum becomes NaN
/// (or infinite when the running power has not underflowed).
pub fn asin_series(x: f32, rounds: u32) -> f32 {
    let mut a = x;
    let mut z = x;
    let mut n: i32 = 1;
    let mut d: i32 = 2;
    for i in 1..=rounds {
        let k = (i as i32).wrapping_shl(1).wrapping_add(1);
        d = d.wrapping_mul(k);
        z *= z * z;
        a += (n as f32 * z) / d as f32;
        n = n.wrapping_mul(n.wrapping_add(2));
        d = d.wrapping_mul(d.wrapping_add(2));
    }
    a
}
