use crate::{completion::to_completion, typed_result::Tag, FailureKind};

pub trait ResultExt<T, E> {
    type Swapped<T2, E2>;

    /// Turn `Ok` into `Err` and vice versa.
    fn swap(self) -> Self::Swapped<E, T>;

    fn tag(&self) -> Tag;

    /// Hand this result to a single-shot completion handler.
    fn complete<F>(self, handler: F)
    where
        Self: Sized,
        E: FailureKind,
        F: FnOnce(Self);
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    type Swapped<T2, E2> = Result<T2, E2>;

    fn swap(self) -> Self::Swapped<E, T> {
        match self {
            Ok(t) => Err(t),
            Err(e) => Ok(e),
        }
    }

    fn tag(&self) -> Tag {
        match self {
            Ok(_) => Tag::Success,
            Err(_) => Tag::Failure,
        }
    }

    fn complete<F>(self, handler: F)
    where
        E: FailureKind,
        F: FnOnce(Self),
    {
        to_completion(self, handler);
    }
}

pub trait OptionExt<T> {
    /// `Some(v)` becomes `Err(v)`, `None` becomes `Ok(ok)`.
    fn err_or<T2>(self, ok: T2) -> Result<T2, T>;

    fn err_or_else<T2, F>(self, ok: F) -> Result<T2, T>
    where
        F: FnOnce() -> T2;
}

impl<T> OptionExt<T> for Option<T> {
    fn err_or<T2>(self, ok: T2) -> Result<T2, T> {
        match self {
            Some(v) => Err(v),
            None => Ok(ok),
        }
    }

    fn err_or_else<T2, F>(self, ok: F) -> Result<T2, T>
    where
        F: FnOnce() -> T2,
    {
        match self {
            Some(v) => Err(v),
            None => Ok(ok()),
        }
    }
}
