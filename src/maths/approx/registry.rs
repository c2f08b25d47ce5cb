use super::binomial::acos_binomial;
use super::nvidia::Variant;

/// Every approximator the crate provides, tagged for uniform dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approximation {
    Binomial { rounds: i32 },
    Polynomial(Variant),
}

impl Approximation {
    /// The binomial series with `rounds` terms, then variants 0 through 6.
    pub fn all(rounds: i32) -> [Approximation; 8] {
        let mut out = [Approximation::Binomial { rounds }; 8];
        for (slot, variant) in out[1..].iter_mut().zip(Variant::ALL) {
            *slot = Approximation::Polynomial(variant);
        }
        out
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Approximation::Binomial { .. } => "binomial",
            Approximation::Polynomial(v) => v.name(),
        }
    }

    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        match *self {
            Approximation::Binomial { rounds } => acos_binomial(x, rounds),
            Approximation::Polynomial(v) => v.eval(x),
        }
    }
}
