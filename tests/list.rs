// List public API test suite.
//
// Invariants exercised:
// - Capacity: zero requests fall back to the default, growth doubles,
//   clear keeps the buffer.
// - Ordering: append order is index order; pop takes from the back.
// - Transforms: map mutates in place, for_each only observes, filter
//   copies matches into a fresh list.
use bytetable::{clear_status, last_status, Error, List, DEFAULT_LIST_CAPACITY};

// Test: construction variants.
// Assumes: a zero capacity request is not an error.
// Verifies: the default buffer is used and the list starts empty.
#[test]
fn construction_applies_default_capacity() {
    let list: List<u8> = List::with_capacity(0).unwrap();
    assert!(list.capacity() >= DEFAULT_LIST_CAPACITY);
    assert!(list.is_empty());

    let sized: List<u8> = List::with_capacity(10).unwrap();
    assert!(sized.capacity() >= 10);
    assert!(sized.capacity() < DEFAULT_LIST_CAPACITY);
}

// Test: append and random access across growth.
// Assumes: pushes double the buffer as needed.
// Verifies: a thousand elements keep their index order and the out of
// range index reports OutOfRange.
#[test]
fn push_and_get_across_growth() {
    let mut list = List::with_capacity(4).unwrap();
    for n in 0u32..1000 {
        list.push(n * 2).unwrap();
    }
    assert_eq!(list.len(), 1000);
    for n in (0u32..1000).step_by(97) {
        assert_eq!(list.get(n as usize), Ok(&(n * 2)));
    }
    assert_eq!(list.get(1000), Err(Error::OutOfRange));
    assert_eq!(last_status(), Some(Error::OutOfRange));
    clear_status();
}

// Test: pop drains from the back down to Empty.
// Assumes: pop returns the removed element.
// Verifies: LIFO order, the Empty error at the bottom, and that the list
// remains usable afterwards.
#[test]
fn pop_drains_to_empty() {
    let mut list = List::from_slice(&[1u32, 2, 3]).unwrap();
    assert_eq!(list.pop(), Ok(3));
    assert_eq!(list.pop(), Ok(2));
    assert_eq!(list.pop(), Ok(1));
    assert_eq!(list.pop(), Err(Error::Empty));
    assert_eq!(last_status(), Some(Error::Empty));

    list.push(9).unwrap();
    assert_eq!(list.as_slice(), &[9]);
    clear_status();
}

// Test: resize in both directions.
// Assumes: new slots take T::default().
// Verifies: growth preserves the prefix and fills with defaults;
// shrinking truncates; the capacity never shrinks below the high mark.
#[test]
fn resize_grows_and_truncates() {
    let mut list = List::from_slice(&[7u32, 8]).unwrap();
    list.resize(5).unwrap();
    assert_eq!(list.as_slice(), &[7, 8, 0, 0, 0]);

    let capacity = list.capacity();
    list.resize(1).unwrap();
    assert_eq!(list.as_slice(), &[7]);
    assert_eq!(list.capacity(), capacity);
}

// Test: transform pipeline.
// Assumes: map and filter are independent operations.
// Verifies: map doubles in place; filter keeps matching elements in
// order without touching the source; for_each observes the final state.
#[test]
fn map_filter_for_each_pipeline() {
    let mut list = List::from_slice(&[1u32, 2, 3, 4, 5]).unwrap();
    list.map(|item| *item *= 10);
    assert_eq!(list.as_slice(), &[10, 20, 30, 40, 50]);

    let big = list.filter(|item| *item >= 30).unwrap();
    assert_eq!(big.as_slice(), &[30, 40, 50]);
    assert_eq!(list.len(), 5);

    let mut total = 0u32;
    big.for_each(|item| total += item);
    assert_eq!(total, 120);
}

// Test: clear and reuse.
// Assumes: clear drops elements but not the buffer.
// Verifies: capacity is retained and later pushes start at index zero.
#[test]
fn clear_retains_buffer() {
    let mut list = List::from_slice(&[5u32; 40]).unwrap();
    let capacity = list.capacity();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.capacity(), capacity);

    list.push(1).unwrap();
    assert_eq!(list.get(0), Ok(&1));
}

// Test: owned element types.
// Assumes: the list never clones on push or pop.
// Verifies: heap-backed elements round-trip by value.
#[test]
fn owned_elements_round_trip() {
    let mut list: List<String> = List::with_capacity(2).unwrap();
    list.push(String::from("first")).unwrap();
    list.push(String::from("second")).unwrap();
    list.get_mut(0).unwrap().push_str("!");

    assert_eq!(list.pop().unwrap(), "second");
    assert_eq!(list.pop().unwrap(), "first!");
    assert_eq!(list.pop(), Err(Error::Empty));
    clear_status();
}
