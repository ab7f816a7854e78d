// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::layout_for};

// Alloc imports
use alloc::alloc::{alloc, dealloc};

// Core imports
use core::ptr::NonNull;

/// Allocates an uninitialized block of `cap` slots.
///
/// Zero-sized layouts are not handed to the allocator; a dangling pointer
/// stands in for them.
pub(super) fn alloc_block<T>(cap: usize) -> Result<NonNull<T>, Error> {
    let layout = layout_for::<T>(cap)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: `layout` has a non-zero size.
    let raw = unsafe { alloc(layout) };
    NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed)
}

/// Releases a block obtained from [`alloc_block`] with the same `cap`.
///
/// Does not drop any element.
///
/// # Safety
///
/// `ptr` must come from `alloc_block::<T>(cap)` (or be dangling with
/// `cap == 0`) and must not be used afterwards.
pub(super) unsafe fn free_block<T>(ptr: NonNull<T>, cap: usize) {
    // The layout was validated when the block was allocated.
    let Ok(layout) = layout_for::<T>(cap) else {
        return;
    };
    if layout.size() != 0 {
        // SAFETY: guaranteed by the caller; `layout` is the allocation layout.
        unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}
