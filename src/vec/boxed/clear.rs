// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Sets `len = 0` without releasing or altering the storage block.
    ///
    /// The old values stay in their slots until they are overwritten by a
    /// later push or the block is dropped.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::GrowVec;

    #[test]
    fn test_clear_leaves_stale_values_in_place() {
        use std::rc::Rc;

        let shared = Rc::new(());
        let mut v: GrowVec<Option<Rc<()>>> = GrowVec::new();
        v.push(Some(Rc::clone(&shared))).unwrap();
        v.push(Some(Rc::clone(&shared))).unwrap();
        v.clear();
        assert_eq!(Rc::strong_count(&shared), 3);

        // Overwriting a stale slot drops the value it held.
        v.push(None).unwrap();
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(v);
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
