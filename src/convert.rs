//! Conversions between containers.
//!
//! These helpers only iterate their sources; none of them mutates the
//! container it reads from. Targets that need hashing take a
//! [`TableBuilder`] so the caller decides the functions and capacity.

use crate::key::copy_bytes;
use crate::list::List;
use crate::set::ByteSet;
use crate::status::{self, Error};
use crate::table::{ByteTable, TableBuilder};

/// Builds a set holding the distinct byte views of `items`. Duplicates in
/// the input are silently skipped.
pub fn set_from_items<T>(builder: TableBuilder, items: &[T]) -> Result<ByteSet, Error>
where
    T: AsRef<[u8]>,
{
    status::record(collect_set(builder, items.iter().map(T::as_ref)))
}

/// Builds a set holding the distinct byte views of a list's elements.
pub fn list_to_set<T>(builder: TableBuilder, list: &List<T>) -> Result<ByteSet, Error>
where
    T: AsRef<[u8]>,
{
    status::record(collect_set(builder, list.iter().map(T::as_ref)))
}

fn collect_set<'a>(
    builder: TableBuilder,
    items: impl Iterator<Item = &'a [u8]>,
) -> Result<ByteSet, Error> {
    let mut set = builder.build_set()?;
    for item in items {
        match set.add(item) {
            Ok(()) | Err(Error::KeyExists) => {}
            Err(error) => return Err(error),
        }
    }
    Ok(set)
}

/// Copies a set's interned items into a list, in the set's iteration
/// order.
pub fn set_to_list(set: &ByteSet) -> Result<List<Box<[u8]>>, Error> {
    status::record(copy_out(set.len(), set.iter()))
}

/// Copies a table's interned keys into a list, in the table's iteration
/// order.
pub fn table_keys<V>(table: &ByteTable<V>) -> Result<List<Box<[u8]>>, Error> {
    status::record(copy_out(table.len(), table.iter().map(|(key, _)| key)))
}

fn copy_out<'a>(
    len: usize,
    items: impl Iterator<Item = &'a [u8]>,
) -> Result<List<Box<[u8]>>, Error> {
    let mut out = List::with_capacity(len.max(1))?;
    for item in items {
        out.push(copy_bytes(item)?)?;
    }
    Ok(out)
}

/// Clones a table's values into a list, in the table's iteration order.
pub fn table_values<V>(table: &ByteTable<V>) -> Result<List<V>, Error>
where
    V: Clone,
{
    status::record(clone_values(table))
}

fn clone_values<V>(table: &ByteTable<V>) -> Result<List<V>, Error>
where
    V: Clone,
{
    let mut out = List::with_capacity(table.len().max(1))?;
    for (_, value) in table.iter() {
        out.push(value.clone())?;
    }
    Ok(out)
}

/// Whether any two list elements share equal byte views, decided through
/// a scratch set built from `builder`.
pub fn has_duplicates<T>(builder: TableBuilder, list: &List<T>) -> Result<bool, Error>
where
    T: AsRef<[u8]>,
{
    status::record(scan_duplicates(builder, list))
}

fn scan_duplicates<T>(builder: TableBuilder, list: &List<T>) -> Result<bool, Error>
where
    T: AsRef<[u8]>,
{
    let mut seen = builder.build_set()?;
    for item in list.iter() {
        match seen.add(item.as_ref()) {
            Ok(()) => {}
            Err(Error::KeyExists) => return Ok(true),
            Err(error) => return Err(error),
        }
    }
    Ok(false)
}
