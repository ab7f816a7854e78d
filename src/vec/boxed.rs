// Invariants for the default (boxed) backend:
// - `buf.len() == cap` always holds; every slot of `buf` is an initialized `T`.
// - `0 <= len <= cap`.
// - `cap == 0` means `buf` is the empty boxed slice, which owns no allocation.
// - Slots in `buf[len..cap]` hold `T::default()` or stale values left behind
//   by `clear`; they are never exposed through public methods.

mod block;
mod clear;
mod clone;
mod extend;
mod new;
mod push;
mod slice;
