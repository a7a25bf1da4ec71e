//! Set of byte strings layered over the hash table.
//!
//! Items are interned as table keys; the unit value slot is free. The
//! set therefore inherits the table's key formats, growth, and error
//! behavior wholesale.

use crate::status::Error;
use crate::table::{self, ByteTable, TableBuilder};

/// Set of distinct byte strings.
///
/// Built by [`TableBuilder::build_set`], so creation validates the hash
/// and equality functions exactly like a table.
pub struct ByteSet {
    table: ByteTable<()>,
}

impl TableBuilder {
    /// Finishes the builder into an empty set.
    pub fn build_set(self) -> Result<ByteSet, Error> {
        Ok(ByteSet {
            table: self.build()?,
        })
    }
}

impl ByteSet {
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Interns `item`, copying its logical bytes. A present item is
    /// rejected with [`Error::KeyExists`].
    pub fn add(&mut self, item: &[u8]) -> Result<(), Error> {
        self.table.insert(item, ()).map_err(Error::from)
    }

    /// Removes `item`, or fails with [`Error::NotFound`].
    pub fn remove(&mut self, item: &[u8]) -> Result<(), Error> {
        self.table.remove(item)
    }

    /// Whether `item` is present; answering `false` is still a successful
    /// query.
    pub fn contains(&self, item: &[u8]) -> bool {
        self.table.contains_key(item)
    }

    /// Borrows the interned bytes of a present item (the set-owned copy,
    /// truncated to its logical length), or [`Error::NotFound`].
    pub fn get(&self, item: &[u8]) -> Result<&[u8], Error> {
        self.table.get_key_value(item).map(|(interned, _)| interned)
    }

    /// Drops every item while keeping the bucket array.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Visits every interned item in arena order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.table.iter(),
        }
    }
}

/// Iterator over a set's interned items.
pub struct Iter<'a> {
    it: table::Iter<'a, ()>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(item, _)| item)
    }
}

impl<'a> IntoIterator for &'a ByteSet {
    type Item = &'a [u8];
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
