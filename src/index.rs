// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowVec`](crate::GrowVec).
//!
//! `Index` and `IndexMut` mirror slice behavior over the initialized prefix
//! `[0..len)`: any index `>= len` panics, even when it is below the capacity.
//! [`GrowVec::get`](crate::GrowVec::get) is the non-panicking form.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::ops::{Index, IndexMut, Range, RangeFull};

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T> Index<Range<usize>> for GrowVec<T> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFull> for GrowVec<T> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
impl<T> IndexMut<Range<usize>> for GrowVec<T> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFull> for GrowVec<T> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::GrowVec;

    #[test]
    fn test_index_reads_in_insertion_order() {
        let mut v: GrowVec<i32> = GrowVec::new();
        for x in [10, 20, 30, 40, 50] {
            v.push(x).unwrap();
        }
        for (i, x) in [10, 20, 30, 40, 50].into_iter().enumerate() {
            assert_eq!(v[i], x);
        }
    }

    #[test]
    fn test_index_mut_single_element() {
        let mut v: GrowVec<i32> = GrowVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        v[1] = 10;
        v[3] = 40;
        assert_eq!(v.as_slice(), &[1, 10, 3, 40]);
    }

    #[test]
    fn test_ranges() {
        let mut v: GrowVec<i32> = GrowVec::try_from(&[0, 1, 2, 3, 4][..]).unwrap();
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);
        v[1..3].copy_from_slice(&[10, 20]);
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 4]);
        v[..].copy_from_slice(&[5, 5, 5, 5, 5]);
        assert_eq!(v.as_slice(), &[5, 5, 5, 5, 5]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_panics_within_capacity() {
        let v: GrowVec<i32> = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.capacity(), 4);
        let _ = v[3];
    }

    #[test]
    #[should_panic]
    fn test_index_after_clear_panics() {
        let mut v: GrowVec<i32> = GrowVec::try_from(&[1, 2][..]).unwrap();
        v.clear();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    fn test_index_on_unallocated_panics() {
        let v: GrowVec<i32> = GrowVec::new();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    fn test_index_mut_past_len_panics() {
        let mut v: GrowVec<i32> = GrowVec::with_len(3).unwrap();
        v[3] = 1;
    }
}
