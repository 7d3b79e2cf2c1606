use std::{iter::Rev, marker::PhantomData};

use super::{DynamicArray, Error, List};

/// A last-in, first-out view over a [`List`].
///
/// The top of the stack is the highest index of the backing sequence. Growth
/// is left entirely to the backing sequence, so a stack is never full.
///
/// Everything that exposes more than one element (`iter`, `to_vec`,
/// `copy_into`, equality) works top to bottom, which is the reverse of the
/// backing sequence's own order.
///
/// ```
/// use nestcheck::{LinkedSequence, Stack};
///
/// let mut stack = Stack::with_backing(LinkedSequence::new());
/// stack.push("outer");
/// stack.push("inner");
///
/// assert_eq!(stack.to_vec(), vec!["inner", "outer"]);
/// assert_eq!(stack.search(&"outer"), Some(2));
/// assert_eq!(stack.pop(), Ok("inner"));
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T, L = DynamicArray<T>> {
    list: L,
    element: PhantomData<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack backed by a [`DynamicArray`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_backing(DynamicArray::new())
    }
}

impl<T, L: List<T>> Stack<T, L> {
    /// Creates a stack over `list`.
    ///
    /// Any elements already in `list` become the stack's contents, with the
    /// last element on top.
    #[must_use]
    pub const fn with_backing(list: L) -> Self {
        Self {
            list,
            element: PhantomData,
        }
    }

    /// Returns the number of elements on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Places `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, Error> {
        let top = self.top_index()?;
        self.list.remove(top)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, Error> {
        let top = self.top_index()?;
        self.list.get(top)
    }

    fn top_index(&self) -> Result<usize, Error> {
        self.list.len().checked_sub(1).ok_or(Error::EmptyStack)
    }

    /// Returns the 1-based distance from the top to the topmost element equal
    /// to `value`, or `None` if no element matches.
    #[must_use]
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|candidate| candidate == value)
            .map(|depth| depth + 1)
    }

    /// Returns `true` if any element is equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(value)
    }

    /// Copies the elements into a new `Vec`, top first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the elements into `buffer`, top first, replacing its contents.
    ///
    /// The buffer's allocation is reused when it is already large enough.
    pub fn copy_into(&self, buffer: &mut Vec<T>)
    where
        T: Clone,
    {
        buffer.clear();
        buffer.reserve_exact(self.len());
        buffer.extend(self.iter().cloned());
    }

    /// Returns an iterator from the top of the stack to the bottom.
    #[must_use]
    pub fn iter(&self) -> StackIter<'_, T, L> {
        StackIter {
            inner: self.list.iter().rev(),
        }
    }

    /// Always `false`: the backing sequence grows on demand.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        false
    }

    /// Returns the backing sequence.
    #[must_use]
    pub fn into_inner(self) -> L {
        self.list
    }
}

impl<T, L: List<T> + Default> Default for Stack<T, L> {
    fn default() -> Self {
        Self::with_backing(L::default())
    }
}

impl<T, L, M> PartialEq<Stack<T, M>> for Stack<T, L>
where
    T: PartialEq,
    L: List<T>,
    M: List<T>,
{
    fn eq(&self, other: &Stack<T, M>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, L: List<T>> Eq for Stack<T, L> {}

impl<'a, T, L: List<T>> IntoIterator for &'a Stack<T, L> {
    type Item = &'a T;
    type IntoIter = StackIter<'a, T, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Stack`], from the top element to the bottom.
pub struct StackIter<'a, T: 'a, L: List<T> + 'a> {
    inner: Rev<L::Iter<'a>>,
}

impl<'a, T: 'a, L: List<T> + 'a> StackIter<'a, T, L> {
    /// Returns `true` once every element has been yielded.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.inner.len() == 0
    }

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the iterator is exhausted.
    pub fn try_next(&mut self) -> Result<&'a T, Error> {
        self.next().ok_or(Error::NoSuchElement)
    }
}

impl<'a, T: 'a, L: List<T> + 'a> Iterator for StackIter<'a, T, L> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: 'a, L: List<T> + 'a> ExactSizeIterator for StackIter<'a, T, L> {}
