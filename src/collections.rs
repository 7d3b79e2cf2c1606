//! Sequence back-ends and the LIFO stack built on top of them.
//!
//! Both [`DynamicArray`] and [`LinkedSequence`] implement the [`List`]
//! capability set, so a [`Stack`] can be backed by either one. The choice is
//! made when the stack is constructed.
//!
//! Values are always present: the type system rules out the "absent value"
//! arguments a dynamically typed list would have to reject at runtime. What
//! remains is reported through [`Error`].

mod dynamic_array;
pub use dynamic_array::{DEFAULT_CAPACITY, DynamicArray, Iter as ArrayIter};

mod linked_sequence;
pub use linked_sequence::{Iter as LinkedIter, LinkedSequence};

mod list;
pub use list::List;

mod stack;
pub use stack::{Stack, StackIter};

/// Errors raised by the collection types.
///
/// These indicate misuse by the caller. None of them leave the collection in
/// a modified state.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index was outside the valid range for the operation.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the collection at the time of the call.
        len: usize,
    },

    /// `pop` or `peek` was called on an empty stack.
    #[error("stack is empty")]
    EmptyStack,

    /// An iterator was advanced past its last element.
    #[error("no more elements")]
    NoSuchElement,
}

impl Error {
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}
