// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor and iterator support for [`GrowVec`](crate::GrowVec).
//!
//! - [`Cursor`] is a copyable position inside a vector's storage, obtained
//!   from [`GrowVec::begin`](crate::GrowVec::begin) /
//!   [`GrowVec::end`](crate::GrowVec::end). It supports dereference,
//!   equality and pre/post increment, nothing else.
//! - [`CursorMut`] is the exclusive, writable variant from
//!   [`GrowVec::begin_mut`](crate::GrowVec::begin_mut).
//! - `&GrowVec` and `&mut GrowVec` iterate as slices.
//!
//! Both cursors borrow the vector. Anything that may reallocate the storage
//! needs `&mut GrowVec`, so a cursor can never observe a released block.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{
    fmt,
    ops::{Deref, DerefMut},
    ptr,
};

/// A forward cursor over the elements of a [`GrowVec`].
///
/// Two cursors are equal when they point at the same slot of the same
/// storage block. A default cursor is the null position: it equals the
/// `begin()`/`end()` of any unallocated vector.
///
/// For zero-sized `T` no block is ever allocated, so every vector shares the
/// same dangling base address and cursors of different vectors at the same
/// slot compare equal.
///
/// Dereferencing a cursor at or past [`GrowVec::end`] panics.
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let v = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
/// let mut it = v.begin();
/// assert_eq!(*it, 1);
/// assert_eq!(**it.advance(), 2);
/// let before = it.post_advance();
/// assert_eq!(*before, 2);
/// assert_eq!(*it, 3);
/// it.advance();
/// assert!(it == v.end());
/// ```
pub struct Cursor<'a, T> {
    view: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) const fn new(view: &'a [T], pos: usize) -> Self {
        Self { view, pos }
    }

    /// Returns the element under the cursor, with the vector's lifetime.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at or past the end.
    #[inline]
    pub fn get(&self) -> &'a T {
        &self.view[self.pos]
    }

    /// Moves to the next slot (pre-increment) and returns the cursor.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Moves to the next slot (post-increment), returning the cursor as it
    /// was before moving.
    #[inline]
    #[must_use = "use `advance` to move without keeping the old position"]
    pub fn post_advance(&mut self) -> Self {
        let before = *self;
        self.pos += 1;
        before
    }

    /// Slot index of the cursor, `0` being the first element.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Self { view: &[], pos: 0 }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.view.as_ptr(), other.view.as_ptr()) && self.pos == other.pos
    }
}
impl<T> Eq for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("base", &self.view.as_ptr())
            .field("position", &self.pos)
            .finish()
    }
}

/// A forward cursor with write access to the elements of a [`GrowVec`].
///
/// Holds the vector exclusively, so unlike [`Cursor`] it cannot be copied
/// and there is no second cursor to compare with; use
/// [`is_end`](CursorMut::is_end) to stop.
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let mut v = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
/// let mut it = v.begin_mut();
/// while !it.is_end() {
///     *it *= 10;
///     it.advance();
/// }
/// assert_eq!(v.as_slice(), &[10, 20, 30]);
/// ```
pub struct CursorMut<'a, T> {
    view: &'a mut [T],
    pos: usize,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(view: &'a mut [T]) -> Self {
        Self { view, pos: 0 }
    }

    /// Moves to the next slot (pre-increment) and returns the cursor.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Slot index of the cursor, `0` being the first element.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the cursor is at or past the end.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.view.len()
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.view[self.pos]
    }
}
impl<T> DerefMut for CursorMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.view[self.pos]
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("base", &self.view.as_ptr())
            .field("position", &self.pos)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
