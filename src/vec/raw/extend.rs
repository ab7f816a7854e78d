// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T: Clone> GrowVec<T> {
    /// Appends clones of every element of `src`, in order, through
    /// [`push`](GrowVec::push).
    ///
    /// On error the elements pushed before the failure stay in place.
    pub fn try_extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        for item in src {
            self.push(item.clone())?;
        }
        Ok(())
    }
}

impl<T: Clone> TryFrom<&[T]> for GrowVec<T> {
    type Error = Error;

    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let mut v = Self::new();
        v.try_extend_from_slice(src)?;
        Ok(v)
    }
}
