//! Arccosine approximations and shared helpers.
//!
//! Two families live here: a truncated binomial series for arcsine mapped
//! through acos(x) = pi/2 - asin(x), and seven arithmetic variants of the
//! cubic-times-sqrt approximation from Abramowitz and Stegun (4.4.45). Every
//! function is single precision, pure and allocation-free.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

mod arch;
mod binomial;
mod nvidia;
mod registry;
mod sqrt;

pub use binomial::{acos_binomial, asin_series, MAX_ROUNDS};
pub use nvidia::{
    acos_nvidia0, acos_nvidia1, acos_nvidia2, acos_nvidia3, acos_nvidia4, acos_nvidia5,
    acos_nvidia6, acos_nvidia_fused_with, acos_nvidia_with, Variant, ABS_ERROR_BOUND,
};
pub use registry::Approximation;
pub use sqrt::{DoubleSqrt, HardwareSqrt, SingleSqrt, SqrtPrimitive};

const HAS_FMA: bool = cfg!(target_arch = "aarch64")
    || cfg!(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        target_feature = "fma"
    ));

/// Fused `a * b + c` in single precision with one rounding.
///
/// Uses the FMA instruction when the target guarantees it and `libm::fmaf`
/// otherwise; both are correctly rounded so the result does not depend on
/// the path taken.
#[inline(always)]
fn fmaf_internal(a: f32, b: f32, c: f32) -> f32 {
    #[cfg(any(
        target_arch = "aarch64",
        all(
            any(target_arch = "x86_64", target_arch = "x86"),
            target_feature = "fma"
        )
    ))]
    {
        // Safety: the instruction is part of the compile-time target features.
        unsafe { arch::fmaf_hw(a, b, c) }
    }

    #[cfg(not(any(
        target_arch = "aarch64",
        all(
            any(target_arch = "x86_64", target_arch = "x86"),
            target_feature = "fma"
        )
    )))]
    {
        libm::fmaf(a, b, c)
    }
}

/// Whether the fused chains of variants 4-6 run on an FMA instruction.
#[inline(always)]
pub fn hardware_fma() -> bool {
    HAS_FMA
}

/// 1.0 for inputs strictly below zero, 0.0 otherwise (so -0.0 maps to 0.0).
#[inline(always)]
fn negate_flag(x: f32) -> f32 {
    if x < 0.0 {
        1.0
    } else {
        0.0
    }
}
