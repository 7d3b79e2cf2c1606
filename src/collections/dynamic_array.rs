use std::fmt;

use super::{Error, List};

/// The capacity of a newly constructed [`DynamicArray`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable, contiguous, index-addressed sequence.
///
/// The backing buffer always has `capacity >= len`. Slots `0..len` hold live
/// elements and slots `len..capacity` are empty. When an insertion would
/// overflow the buffer its capacity doubles. The buffer never shrinks.
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements before the
    /// first resize.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements the array can hold without resizing.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    fn live_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots[..self.len]
    }

    /// Makes room for one more element.
    fn reserve_one(&mut self) {
        if self.len < self.capacity() {
            return;
        }

        let new_capacity = match self.capacity() {
            0 => DEFAULT_CAPACITY,
            capacity => capacity.saturating_mul(2),
        };
        tracing::debug!(
            from = self.capacity(),
            to = new_capacity,
            "growing dynamic array"
        );

        let mut slots = empty_slots(new_capacity);
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = slots;
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> List<T> for DynamicArray<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        for slot in self.live_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    fn push(&mut self, value: T) {
        self.reserve_one();
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }

        self.reserve_one();
        // slot `len` is empty, so the rotation leaves an empty slot at `index`
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, Error> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| Error::out_of_range(index, self.len))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.live_mut()
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or_else(|| Error::out_of_range(index, len))
    }

    fn remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        let removed = self
            .live_mut()
            .get_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| Error::out_of_range(index, len))?;

        // moves the emptied slot to the end of the live range
        self.live_mut()[index..].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            inner: self.live().iter(),
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`DynamicArray`], in index order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn filled(n: usize) -> DynamicArray<usize> {
        (0..n).collect()
    }

    #[test]
    fn new_array_is_empty_with_default_capacity() {
        let array: DynamicArray<u8> = DynamicArray::new();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn growth_doubles_capacity_and_preserves_order() {
        let mut array = filled(10);
        assert_eq!(array.capacity(), 10);

        array.push(10);

        assert_eq!(array.capacity(), 20);
        assert_eq!(array.to_vec(), (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn zero_capacity_array_grows_to_default() {
        let mut array = DynamicArray::with_capacity(0);
        array.push('a');
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
        assert_eq!(array.get(0), Ok(&'a'));
    }

    #[test]
    fn insert_at_full_capacity_shifts_after_growth() {
        let mut array = filled(10);
        array.insert(3, 99).unwrap();

        assert_eq!(array.len(), 11);
        assert_eq!(array.to_vec(), vec![0, 1, 2, 99, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test_case(0; "front")]
    #[test_case(2; "middle")]
    #[test_case(5; "end")]
    fn insert_then_remove_is_identity(index: usize) {
        let mut array = filled(5);
        let before = array.to_vec();

        array.insert(index, 42).unwrap();
        assert_eq!(array.get(index), Ok(&42));
        assert_eq!(array.remove(index), Ok(42));

        assert_eq!(array.to_vec(), before);
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut array = filled(3);
        assert_eq!(array.insert(4, 7), Err(Error::out_of_range(4, 3)));
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn accessors_reject_index_len() {
        let mut array = filled(3);
        assert_eq!(array.get(3), Err(Error::out_of_range(3, 3)));
        assert_eq!(array.set(3, 0), Err(Error::out_of_range(3, 3)));
        assert_eq!(array.remove(3), Err(Error::out_of_range(3, 3)));
        assert_eq!(array.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn set_returns_previous_value() {
        let mut array = filled(3);
        assert_eq!(array.set(1, 10), Ok(1));
        assert_eq!(array.to_vec(), vec![0, 10, 2]);
    }

    #[test]
    fn remove_clears_vacated_slot() {
        let mut array = filled(4);
        array.remove(0).unwrap();

        assert_eq!(array.to_vec(), vec![1, 2, 3]);
        assert!(array.slots[3].is_none());
    }

    #[test]
    fn remove_value_removes_first_match() {
        let mut array: DynamicArray<_> = ["a", "b", "a"].into_iter().collect();

        assert_eq!(array.remove_value(&"a"), Some("a"));
        assert_eq!(array.to_vec(), vec!["b", "a"]);
        assert_eq!(array.remove_value(&"z"), None);
    }

    #[test]
    fn contains_uses_value_equality() {
        let array: DynamicArray<String> = ["x".to_string()].into_iter().collect();
        assert!(array.contains(&"x".to_string()));
        assert!(!array.contains(&"y".to_string()));
    }

    #[test]
    fn copy_into_reuses_large_buffer() {
        let array = filled(3);
        let mut buffer = Vec::with_capacity(32);
        buffer.push(100);

        array.copy_into(&mut buffer);

        assert_eq!(buffer, vec![0, 1, 2]);
        assert!(buffer.capacity() >= 32);
    }

    #[test]
    fn iteration_restarts_on_each_call() {
        let array = filled(3);
        let mut first = array.iter();
        first.next();

        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(first.len(), 2);
        assert_eq!(array.iter().rev().next(), Some(&2));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut array = filled(15);
        array.clear();

        assert!(array.is_empty());
        assert_eq!(array.capacity(), 20);
        assert!(array.slots.iter().all(Option::is_none));
    }

    #[test]
    fn extend_from_linked_sequence() {
        use crate::collections::LinkedSequence;

        let mut array = filled(2);
        let linked: LinkedSequence<_> = [7, 8].into_iter().collect();
        array.extend_from(&linked);

        assert_eq!(array.to_vec(), vec![0, 1, 7, 8]);
    }
}
