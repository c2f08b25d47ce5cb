//! Square-root primitives plugged into the polynomial body.
//!
//! All three primitives are correctly rounded: widening to f64, taking the
//! square root and rounding back cannot double-round because 53 >= 2 * 24 + 2.
//! They differ in the code they emit, not in the values they produce.

/// A square-root implementation the polynomial approximators are generic over.
pub trait SqrtPrimitive {
    /// Short label used in reports and benches.
    const NAME: &'static str;

    fn sqrt(x: f32) -> f32;
}

/// `sqrt` on the value widened to double precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSqrt;

/// Library single-precision `sqrtf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleSqrt;

/// The target's scalar square-root instruction (`sqrtss`, `fsqrt`).
///
/// Targets without one use `libm::sqrtf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardwareSqrt;

impl SqrtPrimitive for DoubleSqrt {
    const NAME: &'static str = "double";

    #[inline(always)]
    fn sqrt(x: f32) -> f32 {
        libm::sqrt(f64::from(x)) as f32
    }
}

impl SqrtPrimitive for SingleSqrt {
    const NAME: &'static str = "single";

    #[inline(always)]
    fn sqrt(x: f32) -> f32 {
        libm::sqrtf(x)
    }
}

impl SqrtPrimitive for HardwareSqrt {
    const NAME: &'static str = "hardware";

    #[inline(always)]
    fn sqrt(x: f32) -> f32 {
        #[cfg(any(
            target_arch = "x86_64",
            all(target_arch = "x86", target_feature = "sse"),
            target_arch = "aarch64"
        ))]
        unsafe {
            // Safety: SSE is baseline on x86_64 and checked at compile time on x86.
            super::arch::sqrt_hw(x)
        }

        #[cfg(not(any(
            target_arch = "x86_64",
            all(target_arch = "x86", target_feature = "sse"),
            target_arch = "aarch64"
        )))]
        {
            libm::sqrtf(x)
        }
    }
}
