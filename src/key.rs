//! Key formats and the pluggable hash/equality contract.
//!
//! Keys are arbitrary byte slices. How many of the provided bytes actually
//! belong to the key is decided by the table's [`KeyFormat`]: either every
//! key has one fixed width, or the bytes describe their own length through
//! a caller-supplied function. Hashing and equality are plain function
//! pointers fixed at build time; the engine never inspects key content
//! itself.

use crate::status::Error;

/// Hash over the logical key bytes. Must be pure and deterministic: the
/// same bytes hash identically across calls and across table growth.
pub type HashFn = fn(&[u8]) -> u64;

/// Key equality. Must be consistent with the table's [`HashFn`]: keys that
/// compare equal must hash equal.
pub type EqFn = fn(&[u8], &[u8]) -> bool;

/// Derives the logical length of a key from its leading bytes.
pub type LengthFn = fn(&[u8]) -> usize;

/// How a table derives the logical length of the keys it is given.
#[derive(Copy, Clone)]
pub enum KeyFormat {
    /// Every key is exactly this many bytes. Longer slices are truncated
    /// to the leading width; shorter slices are rejected.
    Fixed(usize),
    /// The key's bytes describe their own length (a terminator scan, a
    /// length prefix). A derived length past the end of the provided
    /// slice is rejected.
    SelfDescribing(LengthFn),
}

impl KeyFormat {
    /// Resolves the logical key within `key`, rejecting slices too short
    /// to contain it.
    pub(crate) fn resolve<'a>(&self, key: &'a [u8]) -> Result<&'a [u8], Error> {
        let len = match *self {
            KeyFormat::Fixed(width) => width,
            KeyFormat::SelfDescribing(length_fn) => length_fn(key),
        };
        if len > key.len() {
            return Err(Error::InvalidArgument);
        }
        Ok(&key[..len])
    }
}

// fn pointers with higher-ranked lifetimes do not implement Debug, so the
// derive is spelled out by hand.
impl core::fmt::Debug for KeyFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyFormat::Fixed(width) => f.debug_tuple("Fixed").field(width).finish(),
            KeyFormat::SelfDescribing(_) => f.write_str("SelfDescribing(..)"),
        }
    }
}

impl Default for KeyFormat {
    /// The whole provided slice is the key.
    fn default() -> Self {
        KeyFormat::SelfDescribing(slice_len)
    }
}

/// FNV-1a over the key bytes. The stock hash to pair with [`byte_eq`].
pub fn fnv1a(key: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for &byte in key {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Byte-wise equality, the stock companion to [`fnv1a`].
pub fn byte_eq(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// Length of the whole slice: every byte handed in belongs to the key.
pub fn slice_len(key: &[u8]) -> usize {
    key.len()
}

/// Length up to (excluding) the first NUL byte, or the whole slice when no
/// NUL is present. Gives C-string keys their conventional identity.
pub fn nul_terminated_len(key: &[u8]) -> usize {
    key.iter().position(|&byte| byte == 0).unwrap_or(key.len())
}

/// Fallible copy of the logical key bytes into engine-owned storage.
pub(crate) fn copy_bytes(bytes: &[u8]) -> Result<Box<[u8]>, Error> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes.len())
        .map_err(|_| Error::OutOfMemory)?;
    buf.extend_from_slice(bytes);
    Ok(buf.into_boxed_slice())
}
