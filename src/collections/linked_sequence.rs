use std::fmt;

use super::{Error, List};

type NodeId = usize;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A doubly-linked sequence with constant-time insertion and removal at
/// either end.
///
/// Nodes live in an arena owned by the sequence. The `prev` and `next` links
/// are arena indices, so neighbours refer to each other without owning each
/// other. Arena order is unrelated to sequence order; only the links define
/// the chain from `head` to `tail`.
///
/// Index-addressed operations walk from the head, except that the first and
/// last positions are reached directly.
pub struct LinkedSequence<T> {
    nodes: Vec<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns a reference to the first element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    /// Returns a reference to the last element.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    fn successors(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.head, |&id| self.nodes[id].next)
    }

    /// Finds the node at `index`, or `None` if `index >= len`.
    fn node_at(&self, index: usize) -> Option<NodeId> {
        let len = self.nodes.len();
        if index >= len {
            None
        } else if index + 1 == len {
            self.tail
        } else {
            self.successors().nth(index)
        }
    }

    /// Detaches `id` from the chain and drops it from the arena.
    fn unlink(&mut self, id: NodeId) -> T {
        let Node { prev, next, .. } = self.nodes[id];

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        let removed = self.nodes.swap_remove(id);

        // the former last arena slot now lives at `id`; repoint its neighbours
        if id < self.nodes.len() {
            let Node { prev, next, .. } = self.nodes[id];
            match prev {
                Some(prev) => self.nodes[prev].next = Some(id),
                None => self.head = Some(id),
            }
            match next {
                Some(next) => self.nodes[next].prev = Some(id),
                None => self.tail = Some(id),
            }
        }

        removed.value
    }
}

impl<T> List<T> for LinkedSequence<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    fn push(&mut self, value: T) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.nodes.len();
        if index > len {
            return Err(Error::out_of_range(index, len));
        }

        // splice between `prev` and the node currently at `index`
        let next = self.node_at(index);
        let prev = next.map_or(self.tail, |next| self.nodes[next].prev);

        let id = self.nodes.len();
        self.nodes.push(Node { value, prev, next });

        match prev {
            Some(prev) => self.nodes[prev].next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(id),
            None => self.tail = Some(id),
        }
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, Error> {
        self.node_at(index)
            .map(|id| &self.nodes[id].value)
            .ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let id = self
            .node_at(index)
            .ok_or_else(|| Error::out_of_range(index, self.len()))?;
        Ok(&mut self.nodes[id].value)
    }

    fn remove(&mut self, index: usize) -> Result<T, Error> {
        let id = self
            .node_at(index)
            .ok_or_else(|| Error::out_of_range(index, self.len()))?;
        Ok(self.unlink(id))
    }

    fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let id = self
            .successors()
            .find(|&id| self.nodes[id].value == *value)?;
        Some(self.unlink(id))
    }

    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for value in iter {
            sequence.push(value);
        }
        sequence
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`LinkedSequence`], from head to tail.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
