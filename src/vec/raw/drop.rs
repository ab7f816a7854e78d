// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::block::free_block;
use crate::vec::GrowVec;

// SAFETY: `GrowVec<T>` uniquely owns its elements, like `Box<[T]>`.
unsafe impl<T: Send> Send for GrowVec<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for GrowVec<T> {}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        self.clear();
        if self.cap != 0 {
            // SAFETY: `ptr` was allocated for `cap` slots and is never used again.
            unsafe { free_block(self.ptr, self.cap) };
        }
    }
}
