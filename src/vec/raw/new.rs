// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::block::alloc_block;
use crate::{
    error::Error,
    vec::{capacity_for, GrowVec},
};

// Core imports
use core::{marker::PhantomData, ptr::NonNull};

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowVec<T> {
    /// Constructs an empty vector. Nothing is allocated.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// An empty vector owning a fresh block of `cap` slots.
    pub(super) fn with_block(cap: usize) -> Result<Self, Error> {
        if cap == 0 {
            return Ok(Self::new());
        }
        Ok(Self {
            ptr: alloc_block(cap)?,
            len: 0,
            cap,
            _owns: PhantomData,
        })
    }

    /// Writes `value` into slot `len` and bumps `len`.
    ///
    /// Callers guarantee `len < cap`.
    #[inline]
    pub(super) fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.cap);
        // SAFETY: `len < cap`, so the slot lies inside the block and is
        // uninitialized; writing does not drop anything.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }
}

impl<T: Default> GrowVec<T> {
    /// Constructs a vector of `n` elements, each `T::default()`.
    ///
    /// The capacity is the smallest power of two `>= n` (`0` when `n == 0`).
    pub fn with_len(n: usize) -> Result<Self, Error> {
        let mut v = Self::with_block(capacity_for(n)?)?;
        for _ in 0..n {
            v.write_next(T::default());
        }
        Ok(v)
    }
}

impl<T: Clone> GrowVec<T> {
    /// Constructs a vector of `n` clones of `value`.
    ///
    /// Sized like [`with_len`](GrowVec::with_len).
    pub fn from_elem(value: T, n: usize) -> Result<Self, Error> {
        let mut v = Self::with_block(capacity_for(n)?)?;
        if n > 0 {
            for _ in 1..n {
                v.write_next(value.clone());
            }
            v.write_next(value);
        }
        Ok(v)
    }
}
