// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::layout_for};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

/// Allocates a block of exactly `cap` slots, filling slot `i` with `fill(i)`.
///
/// `fill` is only called once the allocation has succeeded, so callers that
/// move values out of an old block inside `fill` leave it untouched on error.
pub(super) fn alloc_block<T>(
    cap: usize,
    fill: impl FnMut(usize) -> T,
) -> Result<Box<[T]>, Error> {
    layout_for::<T>(cap)?;
    let mut block = Vec::new();
    block.try_reserve_exact(cap)?;
    block.extend((0..cap).map(fill));
    Ok(block.into_boxed_slice())
}
