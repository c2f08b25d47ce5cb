#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_mm_cvtss_f32, _mm_set_ss, _mm_sqrt_ss};
#[cfg(target_arch = "x86")]
use core::arch::x86::{_mm_cvtss_f32, _mm_set_ss, _mm_sqrt_ss};

#[target_feature(enable = "sse")]
pub(crate) unsafe fn sqrt_hw(x: f32) -> f32 {
    _mm_cvtss_f32(_mm_sqrt_ss(_mm_set_ss(x)))
}

#[cfg(all(target_arch = "x86_64", target_feature = "fma"))]
#[target_feature(enable = "fma")]
pub(crate) unsafe fn fmaf_hw(a: f32, b: f32, c: f32) -> f32 {
    use core::arch::x86_64::_mm_fmadd_ss;
    _mm_cvtss_f32(_mm_fmadd_ss(_mm_set_ss(a), _mm_set_ss(b), _mm_set_ss(c)))
}

#[cfg(all(target_arch = "x86", target_feature = "fma"))]
#[target_feature(enable = "fma")]
pub(crate) unsafe fn fmaf_hw(a: f32, b: f32, c: f32) -> f32 {
    use core::arch::x86::_mm_fmadd_ss;
    _mm_cvtss_f32(_mm_fmadd_ss(_mm_set_ss(a), _mm_set_ss(b), _mm_set_ss(c)))
}
