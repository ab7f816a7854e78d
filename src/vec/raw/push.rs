// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::block::{alloc_block, free_block};
use crate::{
    error::Error,
    vec::{grown_capacity, GrowVec},
};

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Appends `value`, growing the storage block first if it is full.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.cap {
            self.grow()?;
        }
        self.write_next(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), Error> {
        let new_capacity = grown_capacity(self.cap)?;
        let new_ptr = alloc_block::<T>(new_capacity)?;
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity,
            len = self.len,
            "growing storage"
        );
        if self.cap != 0 {
            // SAFETY: the new block holds `new_capacity > len` slots and does
            // not overlap the old one. The `len` initialized elements are
            // moved bitwise, after which the old block owns nothing and is
            // released with the capacity it was allocated with.
            unsafe {
                ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
                free_block(self.ptr, self.cap);
            }
        }
        self.ptr = new_ptr;
        self.cap = new_capacity;
        Ok(())
    }
}
