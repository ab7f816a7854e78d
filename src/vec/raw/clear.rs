// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Drops the live elements and sets `len = 0`, keeping the storage block.
    #[inline]
    pub fn clear(&mut self) {
        let len = self.len;
        // Set first so a panicking `Drop` cannot lead to a double drop.
        self.len = 0;
        // SAFETY: `ptr[..len]` was initialized and is no longer reachable.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len)) };
    }
}
