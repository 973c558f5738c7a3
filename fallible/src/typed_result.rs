use std::{
    error::Error,
    fmt::{Debug, Display},
};

use crate::exts::ResultExt as _;

/// Either a success value of type `V` or a failure of type `E`.
///
/// `Ok` is the success variant and `Err` is the failure variant. The failure
/// type is expected to be a [`FailureKind`]; every operation in this crate
/// that is specific to typed results requires it.
pub type TypedResult<V, E> = Result<V, E>;

/// A closed, enumerable set of failures produced by one family of fallible
/// operations.
///
/// New failures are added by extending the implementing enum, never by
/// returning some unrelated error type.
pub trait FailureKind: Copy + Eq + Debug + Display + Error + 'static {
    /// Every member of the enumeration, in declaration order.
    const ALL: &'static [Self];

    /// The fixed, human-readable description of this failure.
    fn message(&self) -> &'static str;
}

/// Which variant of a [`TypedResult`] is active.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Tag {
    Success,
    Failure,
}

impl Tag {
    pub fn is_success(self) -> bool {
        self == Tag::Success
    }
}

/// Report which variant of `result` is active.
pub fn inspect<V, E>(result: &TypedResult<V, E>) -> Tag
where
    E: FailureKind,
{
    result.tag()
}

/// Apply `f` to the success payload, passing a failure through untouched.
///
/// `f` is never called for a failure.
pub fn map<V, V2, E, F>(result: TypedResult<V, E>, f: F) -> TypedResult<V2, E>
where
    E: FailureKind,
    F: FnOnce(V) -> V2,
{
    match result {
        Ok(value) => Ok(f(value)),
        Err(failure) => Err(failure),
    }
}
