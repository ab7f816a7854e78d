// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowVec`](crate::GrowVec).
//!
//! - **Serialize**: as a sequence of the `len` live elements. Capacity is not
//!   part of the encoding.
//! - **Deserialize**: from any sequence, pushing element by element, so the
//!   capacity of the result follows the usual doubling law. A failed
//!   allocation is reported as a deserialization error.
//!
//! ### Trait bounds
//!
//! - In the default (boxed) backend `push` needs `T: Default`, so
//!   `GrowVec<T>: Deserialize` requires `T: Deserialize<'de> + Default`.
//! - With the `raw-alloc` feature only `T: Deserialize<'de>` is required.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for GrowVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

#[cfg(not(feature = "raw-alloc"))]
impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = GrowVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = GrowVec::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

#[cfg(feature = "raw-alloc")]
impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = GrowVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = GrowVec::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

#[cfg(not(feature = "raw-alloc"))]
impl<'de, T> Deserialize<'de> for GrowVec<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}

#[cfg(feature = "raw-alloc")]
impl<'de, T> Deserialize<'de> for GrowVec<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}
