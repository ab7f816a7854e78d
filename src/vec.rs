// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its backend-independent API.
//!
//! `GrowVec<T>` owns one contiguous storage block and tracks a logical length
//! inside it. Everything that allocates lives in the backend modules
//! (`boxed` by default, `raw` with the `raw-alloc` feature); this module holds
//! the growth law, the read-only queries and the trait impls that only look at
//! the initialized prefix.

#[cfg(not(feature = "raw-alloc"))]
mod boxed;
#[cfg(feature = "raw-alloc")]
mod raw;

// Crate imports
use crate::{
    error::Error,
    iter::{Cursor, CursorMut},
};

// Core imports
use core::{
    alloc::Layout,
    fmt,
    hash::{Hash, Hasher},
};

/// A heap-backed growable array.
///
/// `GrowVec<T>` owns a storage block of `capacity` slots and a logical length
/// `len ∈ 0..=capacity`. Only the prefix `[0..len)` is visible through
/// [`as_slice`](GrowVec::as_slice), indexing, cursors and iteration.
///
/// # Growth law
///
/// When [`push`](GrowVec::push) finds `len == capacity`, the block is replaced
/// by one of `1` slot (if the capacity was `0`) or `2 * capacity` slots. The
/// existing elements are moved over in order and the old block is released.
/// Starting from an empty vector the observed capacities are therefore
/// `0, 1, 2, 4, 8, ...`.
///
/// [`with_len`](GrowVec::with_len) and [`from_elem`](GrowVec::from_elem) size
/// their block with the same law: the smallest capacity reachable by doubling
/// from `1` that holds `n` elements (`5` elements get `8` slots).
///
/// # Copies
///
/// Copies are deep and fallible: [`try_clone`](GrowVec::try_clone) and
/// [`assign`](GrowVec::assign). A copy of a vector with no elements owns no
/// storage and reports `capacity() == 0`, whatever the source capacity was.
/// Otherwise the copy gets a block of the source's capacity.
///
/// # Element bounds
///
/// In the default backend every slot of the block is initialized, so
/// operations that create slots (`push`, `with_len`, `try_clone`, ...) need
/// `T: Default`. For element types without a `Default`, enable the
/// `raw-alloc` feature.
///
/// # Indexing
///
/// `v[i]` panics when `i >= len`. Use [`get`](GrowVec::get) /
/// [`get_mut`](GrowVec::get_mut) for an `Option`. Slots past `len` (spare
/// capacity, or elements hidden by [`clear`](GrowVec::clear)) are never
/// reachable through safe APIs.
///
/// # Cursors
///
/// [`begin`](GrowVec::begin) and [`end`](GrowVec::end) return [`Cursor`]s
/// borrowing the vector, so a push (which may reallocate) cannot happen while
/// one is alive.
///
/// # Examples
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let v: GrowVec<i32> = GrowVec::with_len(5).unwrap();
/// assert_eq!(v.len(), 5);
/// assert_eq!(v.capacity(), 8);
///
/// let mut w = v.try_clone().unwrap();
/// w.push(7).unwrap();
/// assert_eq!(v.len(), 5);
/// assert_eq!(w.len(), 6);
/// ```
#[cfg(not(feature = "raw-alloc"))]
pub struct GrowVec<T> {
    pub(crate) buf: alloc::boxed::Box<[T]>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
}
#[cfg(feature = "raw-alloc")]
pub struct GrowVec<T> {
    pub(crate) ptr: core::ptr::NonNull<T>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) _owns: core::marker::PhantomData<T>,
}

/// Capacity after one growth step from `cap`.
#[inline]
pub(crate) fn grown_capacity(cap: usize) -> Result<usize, Error> {
    if cap == 0 {
        Ok(1)
    } else {
        cap.checked_mul(2).ok_or(Error::CapacityOverflow)
    }
}

/// Smallest capacity reachable from `1` by doubling that holds `n` elements.
/// `n == 0` needs no storage at all.
pub(crate) fn capacity_for(n: usize) -> Result<usize, Error> {
    if n == 0 {
        return Ok(0);
    }
    let mut cap = 1;
    while cap < n {
        cap = grown_capacity(cap)?;
    }
    Ok(cap)
}

/// Layout of a block of `cap` slots of `T`.
#[inline]
pub(crate) fn layout_for<T>(cap: usize) -> Result<Layout, Error> {
    Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)
}

impl<T> GrowVec<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a cursor positioned at the first element.
    ///
    /// For an empty vector this equals [`end`](GrowVec::end).
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Returns a cursor positioned one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Returns a mutable cursor positioned at the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice())
    }

    /// Dumps the length, capacity and elements as a `DEBUG` tracing event.
    ///
    /// Only present in builds with `debug_assertions`; a no-op otherwise.
    #[inline]
    pub fn display(&self)
    where
        T: fmt::Debug,
    {
        #[cfg(debug_assertions)]
        tracing::debug!(
            len = self.len,
            capacity = self.cap,
            elements = ?self.as_slice(),
            "grow-vec contents"
        );
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowVec<T> {}
impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
