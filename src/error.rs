// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowVec`.
//!
//! Only allocation can fail. Errors are `Copy` and implement
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`GrowVec`](crate::GrowVec) that allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The allocator could not provide a block of the requested size.
    AllocFailed,
    /// The requested capacity does not fit in `usize` or in a valid
    /// [`Layout`](core::alloc::Layout).
    CapacityOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed => f.write_str("unable to allocate buffer"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
        }
    }
}

impl CoreError for Error {}

// The boxed backend allocates through `Vec::try_reserve_exact`. Layout
// overflow is checked before that call, so what is left is a refusal.
#[cfg(not(feature = "raw-alloc"))]
impl From<alloc::collections::TryReserveError> for Error {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Self::AllocFailed
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::AllocFailed);
        assert!(s.contains("allocate"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::AllocFailed.to_string(), "unable to allocate buffer");
        assert_eq!(Error::CapacityOverflow.to_string(), "capacity overflow");
    }

    #[cfg(not(feature = "raw-alloc"))]
    #[test]
    fn test_try_reserve_error_maps_to_alloc_failed() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve_exact(usize::MAX).unwrap_err();
        assert_eq!(Error::from(err), Error::AllocFailed);
    }
}
