// Invariants for the `raw-alloc` backend:
// - `0 <= len <= cap` always holds.
// - `cap == 0` means nothing is allocated and `ptr` is dangling.
// - Otherwise `ptr` was returned by `alloc` for `Layout::array::<T>(cap)`,
//   or is dangling when that layout has size zero (zero-sized `T`).
// - Slots `ptr[..len]` hold initialized `T` values owned by the vector.
// - Slots `ptr[len..cap]` are logically uninitialized and must never be read.
// - All public methods maintain these invariants.

mod as_ptr;
mod block;
mod clear;
mod clone;
mod drop;
mod extend;
mod new;
mod push;
mod slice;
