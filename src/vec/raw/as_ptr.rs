// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Returns a raw pointer to the start of the storage block.
    ///
    /// Only the first `len` slots are initialized. The pointer is dangling
    /// while `capacity() == 0` and is invalidated by any push that grows the
    /// block, by [`assign`](GrowVec::assign) and by dropping the vector.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable raw pointer to the start of the storage block.
    ///
    /// Writing to slots past `len` is allowed but does not change `len`; the
    /// written values are never dropped by the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}
