//! LIFO stack layered over [`List`].

use crate::list::List;
use crate::status::{self, Error, InsertError};

/// Last-in, first-out stack. Shares the list's growth and error behavior.
#[derive(Debug)]
pub struct Stack<T> {
    items: List<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Result<Self, Error> {
        Ok(Stack { items: List::new()? })
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Stack {
            items: List::with_capacity(capacity)?,
        })
    }

    /// Pushes `item` on top. A rejected push hands the item back inside
    /// the error.
    pub fn push(&mut self, item: T) -> Result<(), InsertError<T>> {
        self.items.push(item)
    }

    /// Removes and returns the top element, or [`Error::Empty`].
    pub fn pop(&mut self) -> Result<T, Error> {
        self.items.pop()
    }

    /// Borrows the top element without removing it.
    pub fn peek(&self) -> Result<&T, Error> {
        status::record(self.items.as_slice().last().ok_or(Error::Empty))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
