//! acos(x) as a cubic in |x| times sqrt(1 - |x|), reflected for x < 0.
//!
//! Handbook of Mathematical Functions, M. Abramowitz and I. A. Stegun,
//! eq. 4.4.45, as popularised by the Cg reference `acos`. Absolute error
//! <= 6.7e-5 on [-1, 1].
//!
//! Variants 0 through 6 evaluate the same formula. They differ only in
//! literal precision, where intermediates are widened to f64, operation
//! grouping (separate steps or fused multiply-add), where the sign test is
//! placed, and which square-root primitive is used. Each one is kept as its
//! own function because the rounding of each is observable.

use super::sqrt::{HardwareSqrt, SingleSqrt, SqrtPrimitive};
use super::{fmaf_internal, negate_flag};

/// Documented absolute error bound of the cubic approximation.
pub const ABS_ERROR_BOUND: f32 = 6.7e-5;

const C3: f32 = -0.0187293;
const C2: f32 = 0.0742610;
const C1: f32 = -0.2121144;
const C0: f32 = 1.5707288;
const PI_F: f32 = 3.14159265358979;

// Double literals for variants 0 and 1.
const C3_D: f64 = -0.0187293;
const C2_D: f64 = 0.0742610;
const C1_D: f64 = -0.2121144;
const C0_D: f64 = 1.5707288;
const PI_D: f64 = 3.14159265358979;

/// Reference form: double literals, every add and the sqrt product widened
/// to f64 and rounded back, the final reflection added in f64.
pub fn acos_nvidia0(x: f32) -> f32 {
    let negate = negate_flag(x);
    let x = libm::fabsf(x);
    let mut ret = C3_D as f32;
    ret = ret * x;
    ret = (f64::from(ret) + C2_D) as f32;
    ret = ret * x;
    ret = (f64::from(ret) + C1_D) as f32;
    ret = ret * x;
    ret = (f64::from(ret) + C0_D) as f32;
    ret = (f64::from(ret) * libm::sqrt(1.0 - f64::from(x))) as f32;
    ret = ret - 2.0 * negate * ret;
    (f64::from(negate) * PI_D + f64::from(ret)) as f32
}

/// Variant 0 written with compound assignment operators. Same rounding.
pub fn acos_nvidia1(x: f32) -> f32 {
    let negate = negate_flag(x);
    let x = libm::fabsf(x);
    let mut ret = C3_D as f32;
    ret *= x;
    let mut wide = f64::from(ret);
    wide += C2_D;
    ret = wide as f32;
    ret *= x;
    wide = f64::from(ret);
    wide += C1_D;
    ret = wide as f32;
    ret *= x;
    wide = f64::from(ret);
    wide += C0_D;
    ret = wide as f32;
    wide = f64::from(ret);
    wide *= libm::sqrt(1.0 - f64::from(x));
    ret = wide as f32;
    ret -= 2.0 * negate * ret;
    wide = f64::from(negate);
    wide *= PI_D;
    wide += f64::from(ret);
    wide as f32
}

/// Single-precision literals. Only the sqrt and its product stay in f64;
/// `1 - |x|` is now rounded to f32 before widening.
pub fn acos_nvidia2(x: f32) -> f32 {
    let negate = negate_flag(x);
    let x = libm::fabsf(x);
    let mut ret = C3;
    ret *= x;
    ret += C2;
    ret *= x;
    ret += C1;
    ret *= x;
    ret += C0;
    ret = (f64::from(ret) * libm::sqrt(f64::from(1.0 - x))) as f32;
    ret -= 2.0 * negate * ret;
    negate * PI_F + ret
}

/// All single precision with the reflection folded into the return:
/// `r + s * (pi - 2r)`.
pub fn acos_nvidia3(x: f32) -> f32 {
    acos_nvidia_with::<SingleSqrt>(x)
}

/// Variant 3 with the polynomial and the reflection as fused multiply-adds.
pub fn acos_nvidia4(x: f32) -> f32 {
    let negate = negate_flag(x);
    let x = libm::fabsf(x);
    let mut ret = fmaf_internal(C3, x, C2);
    ret = fmaf_internal(ret, x, C1);
    ret = fmaf_internal(ret, x, C0);
    ret *= SingleSqrt::sqrt(1.0 - x);
    fmaf_internal(negate, fmaf_internal(-2.0, ret, PI_F), ret)
}

/// Fused polynomial, sign tested only after the sqrt, reflection as a
/// direct `pi - r` select.
pub fn acos_nvidia5(x: f32) -> f32 {
    acos_nvidia_fused_with::<SingleSqrt>(x)
}

/// Variant 5 on the target's square-root instruction.
pub fn acos_nvidia6(x: f32) -> f32 {
    acos_nvidia_fused_with::<HardwareSqrt>(x)
}

/// Variant 3 arithmetic over an arbitrary square-root primitive.
#[inline]
pub fn acos_nvidia_with<S: SqrtPrimitive>(x: f32) -> f32 {
    let negate = negate_flag(x);
    let x = libm::fabsf(x);
    let mut ret = C3;
    ret *= x;
    ret += C2;
    ret *= x;
    ret += C1;
    ret *= x;
    ret += C0;
    ret *= S::sqrt(1.0 - x);
    ret + negate * (PI_F - 2.0 * ret)
}

/// Variant 5 arithmetic over an arbitrary square-root primitive.
#[inline]
pub fn acos_nvidia_fused_with<S: SqrtPrimitive>(x: f32) -> f32 {
    let a = libm::fabsf(x);
    let mut ret = fmaf_internal(C3, a, C2);
    ret = fmaf_internal(ret, a, C1);
    ret = fmaf_internal(ret, a, C0);
    ret *= S::sqrt(1.0 - a);
    if x < 0.0 {
        PI_F - ret
    } else {
        ret
    }
}

/// One of the seven polynomial variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Nvidia0,
    Nvidia1,
    Nvidia2,
    Nvidia3,
    Nvidia4,
    Nvidia5,
    Nvidia6,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::Nvidia0,
        Variant::Nvidia1,
        Variant::Nvidia2,
        Variant::Nvidia3,
        Variant::Nvidia4,
        Variant::Nvidia5,
        Variant::Nvidia6,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Nvidia0 => "nvidia0",
            Variant::Nvidia1 => "nvidia1",
            Variant::Nvidia2 => "nvidia2",
            Variant::Nvidia3 => "nvidia3",
            Variant::Nvidia4 => "nvidia4",
            Variant::Nvidia5 => "nvidia5",
            Variant::Nvidia6 => "nvidia6",
        }
    }

    /// The plain function pointer, for callers that benchmark or tabulate.
    pub const fn function(self) -> fn(f32) -> f32 {
        match self {
            Variant::Nvidia0 => acos_nvidia0,
            Variant::Nvidia1 => acos_nvidia1,
            Variant::Nvidia2 => acos_nvidia2,
            Variant::Nvidia3 => acos_nvidia3,
            Variant::Nvidia4 => acos_nvidia4,
            Variant::Nvidia5 => acos_nvidia5,
            Variant::Nvidia6 => acos_nvidia6,
        }
    }

    #[inline]
    pub fn eval(self, x: f32) -> f32 {
        (self.function())(x)
    }
}
