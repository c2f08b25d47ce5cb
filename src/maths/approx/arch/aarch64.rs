#[inline(always)]
pub(crate) unsafe fn sqrt_hw(x: f32) -> f32 {
    let out: f32;
    unsafe {
        core::arch::asm!(
            "fsqrt {out:s}, {x:s}",
            out = out(vreg) out,
            x = in(vreg) x,
            options(pure, nomem, nostack)
        );
    }
    out
}

#[inline(always)]
pub(crate) unsafe fn fmaf_hw(a: f32, b: f32, c: f32) -> f32 {
    let out: f32;
    unsafe {
        core::arch::asm!(
            "fmadd {out:s}, {a:s}, {b:s}, {c:s}",
            out = out(vreg) out,
            a = in(vreg) a,
            b = in(vreg) b,
            c = in(vreg) c,
            options(pure, nomem, nostack)
        );
    }
    out
}
