//! Doubly-linked ordered list backed by an arena of slots.
//!
//! Nodes live in a `Vec` and link to each other by slot index, so the list
//! owns every node outright and no node can be shared with another list.
//! Freed slots are recycled on the next insertion.

use crate::types::{GraphError, GraphResult};

#[derive(Debug, Clone)]
struct Slot<T> {
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered, mutable collection with O(1) insertion at both ends.
#[derive(Debug, Clone)]
pub struct SequentialList<T> {
    slots: Vec<Slot<T>>,
    /// Vacant slot indices available for reuse.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> SequentialList<T> {
    /// Create a new, empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append an element at the tail.
    pub fn push_back(&mut self, value: T) {
        let idx = self.allocate(value, self.tail, None);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Insert an element at the head.
    pub fn push_front(&mut self, value: T) {
        let idx = self.allocate(value, None, self.head);
        match self.head {
            Some(head) => self.slots[head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.and_then(|idx| self.unlink(idx))
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.and_then(|idx| self.unlink(idx))
    }

    /// First element.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.slots[idx].value.as_ref())
    }

    /// Last element.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.slots[idx].value.as_ref())
    }

    /// Element at `index`, walking from whichever end is closer.
    pub fn get(&self, index: usize) -> GraphResult<&T> {
        let idx = self.slot_at(index)?;
        self.slots[idx]
            .value
            .as_ref()
            .ok_or(GraphError::InvalidIndex {
                index,
                len: self.len,
            })
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> GraphResult<T> {
        let idx = self.slot_at(index)?;
        self.unlink(idx).ok_or(GraphError::InvalidIndex {
            index,
            len: self.len,
        })
    }

    /// Keep only the elements for which `keep` returns true.
    /// Returns how many were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            cursor = self.slots[idx].next;
            let drop_it = self.slots[idx].value.as_ref().is_some_and(|v| !keep(v));
            if drop_it {
                self.unlink(idx);
                removed += 1;
            }
        }
        removed
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate from head to tail. Use `.rev()` for tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Mutable reference to the first element matching `predicate`.
    pub fn find_mut_by<F>(&mut self, mut predicate: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let idx = self.find_slot(|v| predicate(v))?;
        self.slots[idx].value.as_mut()
    }

    /// Index of the slot holding the element at list position `index`.
    fn slot_at(&self, index: usize) -> GraphResult<usize> {
        let out_of_range = GraphError::InvalidIndex {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }

        let cursor = if index < self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|idx| self.slots[idx].next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in index + 1..self.len {
                cursor = cursor.and_then(|idx| self.slots[idx].prev);
            }
            cursor
        };
        cursor.ok_or(out_of_range)
    }

    fn find_slot<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            if self.slots[idx].value.as_ref().is_some_and(&mut predicate) {
                return Some(idx);
            }
            cursor = self.slots[idx].next;
        }
        None
    }

    fn allocate(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let slot = Slot {
            value: Some(value),
            prev,
            next,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }

    /// Detach slot `idx`, relink its neighbours and hand back its value.
    fn unlink(&mut self, idx: usize) -> Option<T> {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;

        match (prev, next) {
            // Sole element
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
            // Head
            (None, Some(next)) => {
                self.slots[next].prev = None;
                self.head = Some(next);
            }
            // Tail
            (Some(prev), None) => {
                self.slots[prev].next = None;
                self.tail = Some(prev);
            }
            // Interior
            (Some(prev), Some(next)) => {
                self.slots[prev].next = Some(next);
                self.slots[next].prev = Some(prev);
            }
        }

        let slot = &mut self.slots[idx];
        slot.prev = None;
        slot.next = None;
        self.free.push(idx);
        self.len -= 1;
        slot.value.take()
    }
}

impl<T: PartialEq> SequentialList<T> {
    /// Remove the first element equal to `value`. Returns whether one was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find_slot(|v| v == value) {
            Some(idx) => self.unlink(idx).is_some(),
            None => false,
        }
    }

    /// Whether an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// First element equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        let idx = self.find_slot(|v| v == value)?;
        self.slots[idx].value.as_ref()
    }

    /// Mutable reference to the first element equal to `value`.
    pub fn find_mut(&mut self, value: &T) -> Option<&mut T> {
        self.find_mut_by(|v| v == value)
    }
}

impl<T: Clone> SequentialList<T> {
    /// Copy the elements into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SequentialList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SequentialList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SequentialList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SequentialList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SequentialList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Borrowing iterator over a [`SequentialList`], usable from both ends.
pub struct Iter<'a, T> {
    list: &'a SequentialList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let slot = &self.list.slots[idx];
        self.front = slot.next;
        self.remaining -= 1;
        slot.value.as_ref()
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
        let idx = self.back?;
        let slot = &self.list.slots[idx];
        self.back = slot.prev;
        self.remaining -= 1;
        slot.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> SequentialList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_push_both_ends() {
        let mut list = SequentialList::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_sole_element() {
        let mut list = list_of(&[7]);
        assert!(list.remove(&7));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.push_back(8);
        assert_eq!(list.to_vec(), vec![8]);
    }

    #[test]
    fn test_remove_head_tail_interior() {
        let mut list = list_of(&[1, 2, 3, 4, 5]);
        assert!(list.remove(&1));
        assert_eq!(list.front(), Some(&2));
        assert!(list.remove(&5));
        assert_eq!(list.back(), Some(&4));
        assert!(list.remove(&3));
        assert_eq!(list.to_vec(), vec![2, 4]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 2]);
        assert!(!list.remove(&3));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut list = list_of(&[1, 2, 1]);
        assert!(list.remove(&1));
        assert_eq!(list.to_vec(), vec![2, 1]);
    }

    #[test]
    fn test_get_walks_from_either_end() {
        let list = list_of(&[10, 20, 30, 40, 50, 60]);
        for (i, expected) in [10, 20, 30, 40, 50, 60].iter().enumerate() {
            assert_eq!(list.get(i).unwrap(), expected);
        }
        match list.get(6) {
            Err(GraphError::InvalidIndex { index: 6, len: 6 }) => {}
            other => panic!("Expected InvalidIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_at() {
        let mut list = list_of(&[1, 2, 3, 4]);
        assert_eq!(list.remove_at(2).unwrap(), 3);
        assert_eq!(list.remove_at(0).unwrap(), 1);
        assert!(list.remove_at(2).is_err());
        assert_eq!(list.to_vec(), vec![2, 4]);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = list_of(&[1, 2, 3]);
        list.remove(&2);
        list.push_front(0);
        assert_eq!(list.slots.len(), 3);
        assert_eq!(list.to_vec(), vec![0, 1, 3]);
    }

    #[test]
    fn test_retain() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(list.retain(|v| v % 2 == 0), 3);
        assert_eq!(list.to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_double_ended_iteration_meets_in_middle() {
        let list = list_of(&[1, 2, 3]);
        let mut it = list.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_display_and_clear() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.to_string(), "1 <-> 2 <-> 3");
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "empty");
    }

    #[test]
    fn test_find_mut() {
        let mut list = list_of(&[1, 2, 3]);
        if let Some(v) = list.find_mut(&2) {
            *v = 20;
        }
        assert!(list.contains(&20));
        assert!(!list.contains(&2));
    }
}
