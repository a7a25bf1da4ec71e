//! Growable array with explicit doubling growth and index-checked access.

use crate::status::{self, Error, InsertError};

/// Buffer capacity used when a list is created with a requested capacity
/// of zero.
pub const DEFAULT_LIST_CAPACITY: usize = 256;

/// Contiguous growable array.
///
/// The buffer doubles when full (a fresh buffer starts at
/// [`DEFAULT_LIST_CAPACITY`]); growth that cannot be satisfied fails with
/// [`Error::OutOfMemory`] and leaves the list intact. Element access is
/// index-checked, never panicking on caller errors.
#[derive(Debug)]
pub struct List<T> {
    items: Vec<T>,
}

// Doubles the buffer when no spare slot is left. Kept outside the impl so
// `filter` can grow its output without a List in hand yet.
fn ensure_spare<T>(items: &mut Vec<T>) -> Result<(), Error> {
    if items.len() < items.capacity() {
        return Ok(());
    }
    let target = if items.capacity() == 0 {
        DEFAULT_LIST_CAPACITY
    } else {
        items.capacity() * 2
    };
    items
        .try_reserve_exact(target - items.len())
        .map_err(|_| Error::OutOfMemory)
}

impl<T> List<T> {
    /// Empty list with the default capacity.
    pub fn new() -> Result<Self, Error> {
        Self::with_capacity(DEFAULT_LIST_CAPACITY)
    }

    /// Empty list with room for `capacity` elements before the first
    /// growth; zero falls back to the default capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        status::record(Self::reserve_fresh(capacity))
    }

    fn reserve_fresh(capacity: usize) -> Result<Self, Error> {
        let capacity = if capacity == 0 {
            DEFAULT_LIST_CAPACITY
        } else {
            capacity
        };
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory)?;
        Ok(List { items })
    }

    /// Copies a slice into a fresh list sized to its contents.
    pub fn from_slice(source: &[T]) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut list = Self::with_capacity(source.len().max(1))?;
        list.items.extend_from_slice(source);
        status::record_ok();
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots available before the next growth.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends `item`, doubling the buffer first when full. A rejected
    /// push hands the item back inside the error.
    pub fn push(&mut self, item: T) -> Result<(), InsertError<T>> {
        if let Err(error) = ensure_spare(&mut self.items) {
            return Err(InsertError {
                error: status::record_err(error),
                value: item,
            });
        }
        self.items.push(item);
        status::record_ok();
        Ok(())
    }

    /// Borrows the element at `index`, or [`Error::OutOfRange`].
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        status::record(self.items.get(index).ok_or(Error::OutOfRange))
    }

    /// Mutably borrows the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        status::record(self.items.get_mut(index).ok_or(Error::OutOfRange))
    }

    /// Removes and returns the last element, or [`Error::Empty`].
    pub fn pop(&mut self) -> Result<T, Error> {
        status::record(self.items.pop().ok_or(Error::Empty))
    }

    /// Drops every element; the buffer keeps its capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        status::record_ok();
    }

    /// Grows or truncates the list to `new_len` elements, filling new
    /// slots with `T::default()`. Existing elements are preserved.
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        status::record(self.resize_inner(new_len))
    }

    fn resize_inner(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        if new_len > self.items.capacity() {
            self.items
                .try_reserve_exact(new_len - self.items.len())
                .map_err(|_| Error::OutOfMemory)?;
        }
        self.items.resize_with(new_len, T::default);
        Ok(())
    }

    /// Applies `transform` to every element in place, front to back.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(&mut T),
    {
        for item in &mut self.items {
            transform(item);
        }
        status::record_ok();
    }

    /// Visits every element immutably, front to back.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            visit(item);
        }
        status::record_ok();
    }

    /// Copies the elements satisfying `keep` into a new list, preserving
    /// their relative order. The source is left untouched.
    pub fn filter<F>(&self, keep: F) -> Result<List<T>, Error>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        status::record(self.filter_inner(keep))
    }

    fn filter_inner<F>(&self, mut keep: F) -> Result<List<T>, Error>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut kept: Vec<T> = Vec::new();
        for item in &self.items {
            if keep(item) {
                ensure_spare(&mut kept)?;
                kept.push(item.clone());
            }
        }
        Ok(List { items: kept })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{clear_status, last_status};

    /// Invariant: a requested capacity of zero falls back to the default,
    /// and `new` matches it.
    #[test]
    fn zero_capacity_falls_back_to_default() {
        let from_zero: List<u32> = List::with_capacity(0).unwrap();
        assert!(from_zero.capacity() >= DEFAULT_LIST_CAPACITY);
        assert_eq!(from_zero.len(), 0);

        let fresh: List<u32> = List::new().unwrap();
        assert!(fresh.capacity() >= DEFAULT_LIST_CAPACITY);
    }

    /// Invariant: pushes past the capacity double the buffer and preserve
    /// every element in order.
    #[test]
    fn push_doubles_when_full() {
        let mut list = List::with_capacity(2).unwrap();
        for n in 0u32..9 {
            list.push(n).unwrap();
        }
        assert_eq!(list.len(), 9);
        assert!(list.capacity() >= 9);
        for n in 0u32..9 {
            assert_eq!(list.get(n as usize), Ok(&n));
        }
    }

    /// Invariant: indexed access past the length is `OutOfRange` and does
    /// not disturb the elements.
    #[test]
    fn get_checks_bounds() {
        let mut list = List::with_capacity(4).unwrap();
        list.push(10u32).unwrap();
        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(1), Err(Error::OutOfRange));
        assert_eq!(last_status(), Some(Error::OutOfRange));
        assert_eq!(list.get_mut(7), Err(Error::OutOfRange));
        assert_eq!(list.len(), 1);
        clear_status();
    }

    /// Invariant: `pop` removes from the back; popping an empty list is
    /// `Empty` and leaves it usable.
    #[test]
    fn pop_takes_from_the_back() {
        let mut list = List::with_capacity(4).unwrap();
        for n in [10u32, 20, 30] {
            list.push(n).unwrap();
        }
        assert_eq!(list.pop(), Ok(30));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(1), Ok(&20));

        assert_eq!(list.pop(), Ok(20));
        assert_eq!(list.pop(), Ok(10));
        assert_eq!(list.pop(), Err(Error::Empty));
        assert_eq!(last_status(), Some(Error::Empty));
        list.push(40).unwrap();
        assert_eq!(list.get(0), Ok(&40));
        clear_status();
    }

    /// Invariant: `clear` empties the list but keeps the buffer.
    #[test]
    fn clear_keeps_capacity() {
        let mut list = List::with_capacity(8).unwrap();
        for n in 0u32..5 {
            list.push(n).unwrap();
        }
        let capacity = list.capacity();
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), capacity);
        assert!(list.is_empty());
    }

    /// Invariant: growing `resize` fills new slots with defaults and
    /// preserves existing elements; shrinking truncates.
    #[test]
    fn resize_grows_with_defaults_and_truncates() {
        let mut list = List::with_capacity(4).unwrap();
        for n in [1u32, 2, 3] {
            list.push(n).unwrap();
        }
        list.resize(6).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 3, 0, 0, 0]);

        list.resize(2).unwrap();
        assert_eq!(list.as_slice(), &[1, 2]);
        assert_eq!(last_status(), None);
    }

    /// Invariant: `map` transforms every element in place, front to back.
    #[test]
    fn map_transforms_in_place() {
        let mut list = List::from_slice(&[1u32, 2, 3]).unwrap();
        list.map(|item| *item *= 2);
        assert_eq!(list.as_slice(), &[2, 4, 6]);
    }

    /// Invariant: `for_each` visits every element in order without
    /// mutating the list.
    #[test]
    fn for_each_visits_in_order() {
        let list = List::from_slice(&[5u32, 6, 7]).unwrap();
        let mut seen = Vec::new();
        list.for_each(|item| seen.push(*item));
        assert_eq!(seen, [5, 6, 7]);
        assert_eq!(list.as_slice(), &[5, 6, 7]);
    }

    /// Invariant: `filter` copies matching elements in order into a new
    /// list and leaves the source untouched; an all-false predicate yields
    /// an empty list.
    #[test]
    fn filter_copies_matching_elements() {
        let source = List::from_slice(&[1u32, 2, 3, 4, 5, 6]).unwrap();
        let evens = source.filter(|item| item % 2 == 0).unwrap();
        assert_eq!(evens.as_slice(), &[2, 4, 6]);
        assert_eq!(source.as_slice(), &[1, 2, 3, 4, 5, 6]);

        let none = source.filter(|_| false).unwrap();
        assert!(none.is_empty());
    }

    /// Invariant: `from_slice` round-trips through `as_slice` and sizes
    /// the buffer to its contents.
    #[test]
    fn from_slice_round_trip() {
        let list = List::from_slice(&["a", "b", "c"]).unwrap();
        assert_eq!(list.as_slice(), &["a", "b", "c"]);
        assert_eq!(list.len(), 3);

        let empty: List<&str> = List::from_slice(&[]).unwrap();
        assert!(empty.is_empty());
    }

    /// Invariant: iteration borrows elements front to back.
    #[test]
    fn iteration_is_in_order() {
        let list = List::from_slice(&[9u32, 8, 7]).unwrap();
        let collected: Vec<u32> = (&list).into_iter().copied().collect();
        assert_eq!(collected, [9, 8, 7]);
        assert_eq!(list.iter().count(), 3);
    }
}
