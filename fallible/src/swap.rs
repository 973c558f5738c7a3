//! Exchanging values of any type in place.

use std::{cell::Cell, mem};

use thiserror::Error;

use crate::exts::OptionExt as _;

/// Exchange the values behind `a` and `b`.
pub fn swap<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}

/// Exchange the contents of two cells.
///
/// Unlike [`swap`], both arguments may be the same cell, in which case nothing
/// happens.
pub fn swap_cells<T>(a: &Cell<T>, b: &Cell<T>) {
    a.swap(b);
}

/// Exchange the elements at `i` and `j`. Swapping an index with itself is a
/// no-op.
pub fn swap_at<T>(items: &mut [T], i: usize, j: usize) -> Result<(), SwapError> {
    let len = items.len();

    [i, j]
        .into_iter()
        .find(|&index| index >= len)
        .map(|index| SwapError::OutOfBounds { index, len })
        .err_or_else(|| items.swap(i, j))
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SwapError {
    #[error("index {index} is out of bounds for a slice of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
