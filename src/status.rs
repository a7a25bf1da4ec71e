//! Error taxonomy and the per-thread last-status register.
//!
//! Every fallible container operation returns an explicit `Result`; the
//! register is a convenience layered on top for callers that want to poll
//! the outcome of the most recent operation instead of threading `Result`s
//! through their own plumbing.

use core::fmt;
use std::cell::Cell;

/// Failure kinds reported by every container in this crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// An allocation could not be satisfied; the container is unchanged.
    OutOfMemory,
    /// A key was shorter than its declared or derived length.
    InvalidArgument,
    /// Lookup or removal of a key that is not present.
    NotFound,
    /// Insertion of a key that is already present.
    KeyExists,
    /// List index at or past the current length.
    OutOfRange,
    /// Pop or peek on an empty list or stack.
    Empty,
    /// A table or set was built without a hash function.
    MissingHashFn,
    /// A table or set was built without an equality function.
    MissingEqFn,
}

impl Error {
    /// Short, stable description of the error kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Error::OutOfMemory => "out of memory",
            Error::InvalidArgument => "invalid argument",
            Error::NotFound => "not found",
            Error::KeyExists => "key already exists",
            Error::OutOfRange => "index out of range",
            Error::Empty => "container is empty",
            Error::MissingHashFn => "hash function missing",
            Error::MissingEqFn => "equality function missing",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for Error {}

/// Error returned by a rejected insert or push, carrying the value the
/// container refused so the caller keeps ownership of it.
pub struct InsertError<V> {
    /// Why the value was rejected.
    pub error: Error,
    /// The value handed back, untouched.
    pub value: V,
}

impl<V> InsertError<V> {
    /// Discards the error kind and recovers the rejected value.
    pub fn into_value(self) -> V {
        self.value
    }
}

// Manual impls: the contained value need not be Debug/Display to report
// the error kind.
impl<V> fmt::Debug for InsertError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<V> fmt::Display for InsertError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<V> std::error::Error for InsertError<V> {}

impl<V> From<InsertError<V>> for Error {
    fn from(rejected: InsertError<V>) -> Error {
        rejected.error
    }
}

thread_local! {
    // One slot per thread: operations interleaved from different threads
    // never clobber each other's outcome.
    static LAST_STATUS: Cell<Option<Error>> = const { Cell::new(None) };
}

/// Outcome of the most recent container operation on the calling thread;
/// `None` means it succeeded.
pub fn last_status() -> Option<Error> {
    LAST_STATUS.with(|status| status.get())
}

/// Resets the register to the success state.
pub fn clear_status() {
    LAST_STATUS.with(|status| status.set(None));
}

/// Stores `outcome` in the register and hands it back unchanged, so
/// operations can wrap their tail expression.
pub(crate) fn record<T>(outcome: Result<T, Error>) -> Result<T, Error> {
    LAST_STATUS.with(|status| status.set(outcome.as_ref().err().copied()));
    outcome
}

/// Marks the most recent operation as successful.
pub(crate) fn record_ok() {
    LAST_STATUS.with(|status| status.set(None));
}

/// Marks the most recent operation as failed with `error`.
pub(crate) fn record_err(error: Error) -> Error {
    LAST_STATUS.with(|status| status.set(Some(error)));
    error
}
