use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised by [`OrderedQueue`] head access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("{operation}: queue is empty")]
    Empty { operation: &'static str },
}

/// FIFO container: enqueue at the tail, peek and dequeue at the head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for OrderedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the tail
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Borrow the head item without removing it
    pub fn front(&self) -> Result<&T, QueueError> {
        self.items.front().ok_or(QueueError::Empty { operation: "front" })
    }

    /// Remove and return the head item
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.items
            .pop_front()
            .ok_or(QueueError::Empty { operation: "dequeue" })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate head to tail without consuming anything
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Keep only the items matching `keep`, preserving their relative order.
    ///
    /// Returns how many items were dropped.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(keep);
        before - self.items.len()
    }
}

impl<T> FromIterator<T> for OrderedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OrderedQueue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
