// Architecture-specific single-instruction helpers (sqrt, FMA).

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod x86;
#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) use x86::sqrt_hw;
#[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "fma"))]
pub(crate) use x86::fmaf_hw;

#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::{fmaf_hw, sqrt_hw};
