//! bytetable: byte-keyed in-memory containers built around a chained
//! hash table with pluggable hashing and automatic growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: provide a small family of embeddable containers (hash table,
//!   set, list, stack) sharing one key model, one error taxonomy, and
//!   one per-thread status register, each piece small enough to reason
//!   about independently.
//! - Layers:
//!   - ByteTable<V>: the core engine. A bucket array of chain heads plus
//!     a `SlotMap` arena of entry nodes; chains are linked through the
//!     arena's generational keys, so the classic singly linked bucket
//!     list needs no pointers and no unsafe code.
//!   - ByteSet: table adapter that interns items as keys with a unit
//!     value slot.
//!   - List<T> / Stack<T>: growable array and its LIFO adapter,
//!     independent of the hashing machinery but sharing the error
//!     surface.
//!   - convert: read-only glue that copies keys, values, or members
//!     between containers.
//!
//! Constraints
//! - Single-threaded per instance: all mutation goes through `&mut self`,
//!   so concurrent mutation of one container is unrepresentable; distinct
//!   instances are fully independent.
//! - Keys are arbitrary byte slices. Their logical length comes from the
//!   table's [`KeyFormat`]: a fixed width or a self-describing length
//!   function. The engine copies the logical bytes on insert and owns the
//!   copy until the entry dies.
//! - Values are opaque to the engine: moved in on insert, borrowed on
//!   lookup, moved back out on removal or rejection, and handed to an
//!   optional cleanup closure on bulk teardown. No other policy is
//!   applied to them.
//! - Hash and equality are plain function pointers fixed at build time;
//!   keys equal under the equality function must hash equal. Indexing
//!   always recomputes from the stored key bytes, so growth never calls
//!   back into caller state beyond those two functions.
//!
//! Growth
//! - Buckets double when the load factor (entries per bucket) exceeds 3/4
//!   before an insert, re-indexing every entry under the new capacity and
//!   pushing each at its new chain head; chain order is not preserved and
//!   capacity never shrinks. A duplicate is rejected before the growth
//!   check, so a failed insert never resizes the table.
//!
//! Failure policy
//! - Every fallible operation returns `Result` with an [`Error`] kind;
//!   rejected inserts hand the value back through [`InsertError`]. The
//!   allocations behind bucket arrays, key copies, and list buffers are
//!   made through fallible reservation, reported as
//!   [`Error::OutOfMemory`], and leave the container in its previous
//!   state when they fail.
//! - The per-thread register ([`last_status`]/[`clear_status`]) mirrors
//!   the outcome of the most recent fallible or mutating operation as a
//!   polling convenience; infallible queries such as `len` leave it
//!   untouched so a failure can still be inspected afterwards.
//!
//! Notes and non-goals
//! - Collision handling is chaining only; no open addressing or probing.
//! - No ordered iteration: entries come back in arena order.
//! - No persistence and no concurrent access; the register is
//!   `thread_local!`, one slot per thread.
//! - Hashes are whatever the caller supplies; nothing here is
//!   cryptographic.

pub mod convert;
pub mod key;
pub mod list;
pub mod set;
pub mod stack;
pub mod status;
pub mod table;

mod table_proptest;

// Public surface
pub use key::{byte_eq, fnv1a, nul_terminated_len, slice_len, EqFn, HashFn, KeyFormat, LengthFn};
pub use list::{List, DEFAULT_LIST_CAPACITY};
pub use set::ByteSet;
pub use stack::Stack;
pub use status::{clear_status, last_status, Error, InsertError};
pub use table::{ByteTable, TableBuilder, DEFAULT_TABLE_CAPACITY};
