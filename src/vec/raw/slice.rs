// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, `ptr[..len]` is initialized and `ptr` is
        // non-null and aligned (dangling when nothing is allocated, in which
        // case `len == 0`).
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` gives exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a reference to element `i` without any bounds check.
    ///
    /// # Safety
    ///
    /// `i < self.len()` must hold. Slots past `len` are uninitialized.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.len);
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.ptr.as_ptr().add(i) }
    }

    /// Returns a mutable reference to element `i` without any bounds check.
    ///
    /// # Safety
    ///
    /// `i < self.len()` must hold. Slots past `len` are uninitialized.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len);
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.ptr.as_ptr().add(i) }
    }
}
