// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::block::alloc_block;
use crate::{
    error::Error,
    vec::{grown_capacity, GrowVec},
};

// Core imports
use core::mem;

impl<T: Default> GrowVec<T> {
    /// Appends `value`, growing the storage block first if it is full.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.cap {
            self.grow()?;
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    fn grow(&mut self) -> Result<(), Error> {
        let new_capacity = grown_capacity(self.cap)?;
        let len = self.len;
        let old = &mut self.buf;
        let buf = alloc_block(new_capacity, |i| {
            if i < len {
                mem::take(&mut old[i])
            } else {
                T::default()
            }
        })?;
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity,
            len,
            "growing storage"
        );
        // Dropping the old block releases it along with the defaults left behind.
        self.buf = buf;
        self.cap = new_capacity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{error::Error, vec::GrowVec};

    #[test]
    fn test_push_overflow_leaves_vec_unchanged() {
        // Zero-sized elements let `len == cap` sit at the doubling limit
        // without allocating anything.
        let full = 1usize << (usize::BITS - 1);
        let mut v: GrowVec<()> = GrowVec::new();
        v.len = full;
        v.cap = full;

        assert_eq!(v.push(()), Err(Error::CapacityOverflow));
        assert_eq!(v.len(), full);
        assert_eq!(v.capacity(), full);

        v.len = 0;
        v.cap = 0;
    }

    #[test]
    fn test_spare_slots_hold_defaults() {
        let mut v: GrowVec<i32> = GrowVec::new();
        v.push(1).unwrap();
        v.push(2).unwrap();
        v.push(3).unwrap();
        assert_eq!(v.capacity(), 4);
        assert_eq!(&v.buf[..], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_growth_moves_without_cloning() {
        use std::rc::Rc;

        let shared = Rc::new(5);
        let mut v: GrowVec<Option<Rc<i32>>> = GrowVec::new();
        for _ in 0..9 {
            v.push(Some(Rc::clone(&shared))).unwrap();
        }
        assert_eq!(v.capacity(), 16);
        assert_eq!(Rc::strong_count(&shared), 10);
        drop(v);
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
