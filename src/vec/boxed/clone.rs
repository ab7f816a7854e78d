// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::block::alloc_block;
use crate::{error::Error, vec::GrowVec};

impl<T: Clone + Default> GrowVec<T> {
    /// Deep-copies `self` into a freshly allocated vector.
    ///
    /// A vector with no elements copies to an unallocated one
    /// (`capacity() == 0`). Otherwise the copy has the same capacity and
    /// clones of the `len` live elements.
    pub fn try_clone(&self) -> Result<Self, Error> {
        if self.len == 0 {
            return Ok(Self::new());
        }
        let len = self.len;
        let buf = alloc_block(self.cap, |i| {
            if i < len {
                self.buf[i].clone()
            } else {
                T::default()
            }
        })?;
        Ok(Self {
            buf,
            len,
            cap: self.cap,
        })
    }

    /// Replaces the contents of `self` with a deep copy of `src`.
    ///
    /// The copy is built before the old block is released, so on error `self`
    /// is unchanged. Copying from an empty `src` releases the old block.
    pub fn assign(&mut self, src: &Self) -> Result<(), Error> {
        *self = src.try_clone()?;
        Ok(())
    }
}

impl<T: Clone + Default> Clone for GrowVec<T> {
    /// # Panics
    ///
    /// Panics if the copy cannot be allocated. Use
    /// [`try_clone`](GrowVec::try_clone) to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(v) => v,
            Err(e) => panic!("GrowVec::clone: {e}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign(source) {
            panic!("GrowVec::clone_from: {e}");
        }
    }
}
