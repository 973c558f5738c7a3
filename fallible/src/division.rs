use thiserror::Error;
use tracing::trace;

use crate::{
    exts::OptionExt as _,
    typed_result::{FailureKind, TypedResult},
};

/// Ways integer division can fail.
#[derive(Error, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum DivisionFailure {
    /// The divisor was zero.
    #[error("Division by zero is undefined")]
    ZeroDivisor,

    /// The quotient doesn't fit in the integer type (`i64::MIN / -1`).
    #[error("Division overflows the integer range")]
    Overflow,
}

impl FailureKind for DivisionFailure {
    const ALL: &'static [Self] = &[DivisionFailure::ZeroDivisor, DivisionFailure::Overflow];

    fn message(&self) -> &'static str {
        match self {
            DivisionFailure::ZeroDivisor => "Division by zero is undefined",
            DivisionFailure::Overflow => "Division overflows the integer range",
        }
    }
}

/// Divide `x` by `y`, truncating toward zero.
///
/// A zero divisor is reported before anything else, so `divide(0, 0)` is a
/// [`DivisionFailure::ZeroDivisor`].
pub fn divide(x: i64, y: i64) -> TypedResult<i64, DivisionFailure> {
    use DivisionFailure::*;

    trace!(x, y, "dividing");

    let failure = if y == 0 {
        Some(ZeroDivisor)
    } else if x == i64::MIN && y == -1 {
        Some(Overflow)
    } else {
        None
    };

    failure.err_or_else(|| x / y)
}
