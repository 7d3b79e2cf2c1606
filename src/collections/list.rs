use super::Error;

/// The capability set shared by every sequence back-end.
///
/// Positions are zero-based. Accessors (`get`, `set`, `remove`) accept
/// indices in `0..len`; `insert` additionally accepts `len` to append.
pub trait List<T> {
    /// Borrowing iterator over the elements in index order.
    type Iter<'a>: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Appends `value` after the last element.
    fn push(&mut self, value: T);

    /// Inserts `value` at `index`, shifting later elements one place towards
    /// the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`.
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    fn get(&self, index: usize) -> Result<&T, Error>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T, Error>;

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one place towards the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    fn remove(&mut self, index: usize) -> Result<T, Error>;

    /// Removes the first element equal to `value`.
    ///
    /// Returns `None` if no element matches.
    fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.iter().position(|candidate| candidate == value)?;
        self.remove(index).ok()
    }

    /// Returns `true` if any element is equal to `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }

    /// Returns an iterator over the elements in index order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Copies the elements into a new `Vec`, in index order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the elements into `buffer`, replacing its contents.
    ///
    /// The buffer's allocation is reused when it is already large enough.
    fn copy_into(&self, buffer: &mut Vec<T>)
    where
        T: Clone,
    {
        buffer.clear();
        buffer.reserve_exact(self.len());
        buffer.extend(self.iter().cloned());
    }

    /// Appends a copy of every element of `other`, in `other`'s order.
    fn extend_from<L>(&mut self, other: &L)
    where
        L: List<T> + ?Sized,
        T: Clone,
    {
        for value in other.iter() {
            self.push(value.clone());
        }
    }
}
