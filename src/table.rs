//! Chained hash table keyed by arbitrary byte slices.
//!
//! The table owns a bucket array of chain heads and stores entry nodes in
//! a `SlotMap` arena; chains are linked through the arena's generational
//! keys rather than pointers. New entries are pushed at the chain head.
//! When the load factor (entries per bucket) exceeds 3/4 before an insert,
//! the bucket array doubles and every entry is re-indexed by its stored
//! key bytes under the new capacity.

use crate::key::{copy_bytes, EqFn, HashFn, KeyFormat};
use crate::status::{self, Error, InsertError};
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Entry<V> {
    key: Box<[u8]>,
    value: V,
    next: Option<DefaultKey>,
}

/// Hash table mapping owned byte keys to caller-supplied values.
///
/// Keys are copied into the table on insert; values are moved in on insert
/// and moved back out on removal or rejection. The hash and equality
/// functions are fixed at build time and must stay mutually consistent:
/// keys that compare equal must hash equal.
pub struct ByteTable<V> {
    buckets: Vec<Option<DefaultKey>>,
    slots: SlotMap<DefaultKey, Entry<V>>, // entry storage using generational keys
    format: KeyFormat,
    hash_fn: HashFn,
    eq_fn: EqFn,
}

/// Builder validating the pieces a table cannot exist without.
///
/// The hash and equality functions have no defaults; finishing a builder
/// without them fails with [`Error::MissingHashFn`] or
/// [`Error::MissingEqFn`]. A requested capacity of zero is raised to one.
#[derive(Clone, Debug)]
pub struct TableBuilder {
    capacity: usize,
    format: KeyFormat,
    hash_fn: Option<HashFn>,
    eq_fn: Option<EqFn>,
}

/// Bucket count used when the builder is not given one.
pub const DEFAULT_TABLE_CAPACITY: usize = 16;

impl TableBuilder {
    pub fn new() -> Self {
        TableBuilder {
            capacity: DEFAULT_TABLE_CAPACITY,
            format: KeyFormat::default(),
            hash_fn: None,
            eq_fn: None,
        }
    }

    /// Initial bucket count; zero is coerced to one.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// How the table derives the logical length of the keys it is given.
    pub fn key_format(mut self, format: KeyFormat) -> Self {
        self.format = format;
        self
    }

    pub fn hash_fn(mut self, hash_fn: HashFn) -> Self {
        self.hash_fn = Some(hash_fn);
        self
    }

    pub fn eq_fn(mut self, eq_fn: EqFn) -> Self {
        self.eq_fn = Some(eq_fn);
        self
    }

    /// Finishes the builder into an empty table.
    pub fn build<V>(self) -> Result<ByteTable<V>, Error> {
        status::record(self.finish())
    }

    fn finish<V>(self) -> Result<ByteTable<V>, Error> {
        let hash_fn = self.hash_fn.ok_or(Error::MissingHashFn)?;
        let eq_fn = self.eq_fn.ok_or(Error::MissingEqFn)?;
        let capacity = self.capacity.max(1);
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory)?;
        buckets.resize(capacity, None);
        Ok(ByteTable {
            buckets,
            slots: SlotMap::with_key(),
            format: self.format,
            hash_fn,
            eq_fn,
        })
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn reject<V>(error: Error, value: V) -> InsertError<V> {
    InsertError {
        error: status::record_err(error),
        value,
    }
}

impl<V> ByteTable<V> {
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current bucket count. Grows by doubling, never shrinks.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_of(&self, key: &[u8]) -> usize {
        ((self.hash_fn)(key) % self.buckets.len() as u64) as usize
    }

    fn find_in_chain(&self, bucket: usize, key: &[u8]) -> Option<DefaultKey> {
        let mut cursor = self.buckets[bucket];
        while let Some(slot) = cursor {
            let entry = &self.slots[slot];
            if (self.eq_fn)(&entry.key, key) {
                return Some(slot);
            }
            cursor = entry.next;
        }
        None
    }

    fn locate(&self, key: &[u8]) -> Result<DefaultKey, Error> {
        let key = self.format.resolve(key)?;
        self.find_in_chain(self.bucket_of(key), key)
            .ok_or(Error::NotFound)
    }

    /// Doubles the bucket array and re-indexes every entry by its stored
    /// key under the new capacity. Entries are pushed at their new chain
    /// heads, so chain order is not preserved. On allocation failure the
    /// existing buckets stay untouched.
    fn grow(&mut self) -> Result<(), Error> {
        let new_capacity = self.buckets.len() * 2;
        let mut heads: Vec<Option<DefaultKey>> = Vec::new();
        heads
            .try_reserve_exact(new_capacity)
            .map_err(|_| Error::OutOfMemory)?;
        heads.resize(new_capacity, None);
        for (slot, entry) in self.slots.iter_mut() {
            let bucket = ((self.hash_fn)(&entry.key) % new_capacity as u64) as usize;
            entry.next = heads[bucket];
            heads[bucket] = Some(slot);
        }
        self.buckets = heads;
        Ok(())
    }

    /// Inserts a key/value pair, copying the logical key bytes into the
    /// table. Rejects duplicates with [`Error::KeyExists`] before anything
    /// else happens, so a failed insert never grows the table. On any
    /// rejection the value rides back to the caller in the error.
    pub fn insert(&mut self, key: &[u8], value: V) -> Result<(), InsertError<V>> {
        let key = match self.format.resolve(key) {
            Ok(key) => key,
            Err(error) => return Err(reject(error, value)),
        };
        if self.find_in_chain(self.bucket_of(key), key).is_some() {
            return Err(reject(Error::KeyExists, value));
        }
        // Load factor check on the pre-insert population, strictly above
        // 3/4: at exactly 3/4 the table does not grow.
        if self.slots.len() * 4 > self.buckets.len() * 3 {
            if let Err(error) = self.grow() {
                return Err(reject(error, value));
            }
        }
        let stored = match copy_bytes(key) {
            Ok(stored) => stored,
            Err(error) => return Err(reject(error, value)),
        };
        let bucket = self.bucket_of(key);
        let entry = Entry {
            key: stored,
            value,
            next: self.buckets[bucket],
        };
        let slot = self.slots.insert(entry);
        self.buckets[bucket] = Some(slot);
        status::record_ok();
        Ok(())
    }

    /// Borrows the value stored under `key`, or [`Error::NotFound`].
    pub fn get(&self, key: &[u8]) -> Result<&V, Error> {
        status::record(self.locate(key).map(|slot| &self.slots[slot].value))
    }

    /// Mutably borrows the value stored under `key`.
    pub fn get_mut(&mut self, key: &[u8]) -> Result<&mut V, Error> {
        let slot = match self.locate(key) {
            Ok(slot) => slot,
            Err(error) => return Err(status::record_err(error)),
        };
        status::record_ok();
        Ok(&mut self.slots[slot].value)
    }

    /// Borrows the interned key bytes alongside the value. The returned
    /// key is the table-owned copy, truncated to its logical length.
    pub fn get_key_value(&self, key: &[u8]) -> Result<(&[u8], &V), Error> {
        status::record(self.locate(key).map(|slot| {
            let entry = &self.slots[slot];
            (&*entry.key, &entry.value)
        }))
    }

    /// Whether `key` is present. A query that answers `false` still counts
    /// as a successful operation; only an unresolvable key records an
    /// error.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        match self.format.resolve(key) {
            Ok(key) => {
                let found = self.find_in_chain(self.bucket_of(key), key).is_some();
                status::record_ok();
                found
            }
            Err(error) => {
                status::record_err(error);
                false
            }
        }
    }

    /// Removes the entry stored under `key` and moves its value back to
    /// the caller. The key copy is freed with the entry.
    pub fn remove(&mut self, key: &[u8]) -> Result<V, Error> {
        status::record(self.unlink(key))
    }

    fn unlink(&mut self, key: &[u8]) -> Result<V, Error> {
        let key = self.format.resolve(key)?;
        let bucket = self.bucket_of(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.buckets[bucket];
        while let Some(slot) = cursor {
            if (self.eq_fn)(&self.slots[slot].key, key) {
                // Chain links always reference live slots.
                let entry = self.slots.remove(slot).unwrap();
                match prev {
                    Some(prev) => self.slots[prev].next = entry.next,
                    None => self.buckets[bucket] = entry.next,
                }
                return Ok(entry.value);
            }
            prev = Some(slot);
            cursor = self.slots[slot].next;
        }
        Err(Error::NotFound)
    }

    /// Drops every entry while keeping the bucket array, so the table is
    /// immediately reusable at its current capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        for head in &mut self.buckets {
            *head = None;
        }
        status::record_ok();
    }

    /// Like [`ByteTable::clear`], but hands every removed value to
    /// `cleanup` instead of dropping it in place.
    pub fn clear_with<F>(&mut self, mut cleanup: F)
    where
        F: FnMut(V),
    {
        for (_slot, entry) in self.slots.drain() {
            cleanup(entry.value);
        }
        for head in &mut self.buckets {
            *head = None;
        }
        status::record_ok();
    }

    /// Tears the table down, running `cleanup` exactly once per surviving
    /// value before the storage is freed. Plain `Drop` is the teardown
    /// without callbacks.
    pub fn destroy_with<F>(mut self, cleanup: F)
    where
        F: FnMut(V),
    {
        self.clear_with(cleanup);
    }

    /// Visits every live entry as `(key bytes, value)` in arena order,
    /// which is unrelated to insertion or chain order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

/// Iterator over a table's live entries.
pub struct Iter<'a, V> {
    it: slotmap::basic::Iter<'a, DefaultKey, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a [u8], &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, entry)| (&*entry.key, &entry.value))
    }
}

impl<'a, V> IntoIterator for &'a ByteTable<V> {
    type Item = (&'a [u8], &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
