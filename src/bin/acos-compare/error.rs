//! Driver errors and their exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Table written |
//! | 1 | Writing the table failed |
//! | 2 | Missing or unparsable arguments (reported by clap) |
//! | 3 | Step is not finite, or smaller than `f32::EPSILON` |

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    /// Step size that would never reach x = 1.
    #[error("Invalid step specification: {0} (must be finite and at least f32::EPSILON)")]
    InvalidStep(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompareError {
    #[inline]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidStep(_) => 3,
            Self::Io(_) => 1,
        }
    }
}
