use std::fmt::Debug;

/// An indexed binary min-heap over `usize` items, supporting decrease-key.
///
/// Each item is present at most once. `positions` maps an item to its slot in
/// `heap`, so the entry of a queued item can be found and moved in O(log n)
/// when its priority improves.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Heap-ordered `(item, priority)` entries
    heap: Vec<(usize, P)>,

    /// Slot of each item in `heap`, `None` when not queued
    positions: Vec<Option<usize>>,
}

impl<P> IndexedMinHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty priority queue sized for items `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the item is currently queued
    pub fn contains(&self, item: usize) -> bool {
        self.slot(item).is_some()
    }

    /// Inserts an item, or lowers its priority if it is already queued.
    ///
    /// Returns false if the item was queued with a priority that is not
    /// higher than `priority`; the queue is left unchanged in that case.
    pub fn push(&mut self, item: usize, priority: P) -> bool {
        if self.contains(item) {
            return self.decrease_key(item, priority);
        }
        if item >= self.positions.len() {
            self.positions.resize(item + 1, None);
        }
        self.heap.push((item, priority));
        let slot = self.heap.len() - 1;
        self.positions[item] = Some(slot);
        self.sift_up(slot);
        true
    }

    /// Lowers the priority of a queued item.
    ///
    /// Returns false if the item is not queued or `priority` is not lower
    /// than its current one.
    pub fn decrease_key(&mut self, item: usize, priority: P) -> bool {
        match self.slot(item) {
            Some(slot) if priority < self.heap[slot].1 => {
                self.heap[slot].1 = priority;
                self.sift_up(slot);
                true
            }
            _ => false,
        }
    }

    /// Removes the element with the lowest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (item, priority) = self.heap.pop()?;
        self.positions[item] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, priority))
    }

    fn slot(&self, item: usize) -> Option<usize> {
        self.positions.get(item).copied().flatten()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].0] = Some(a);
        self.positions[self.heap[b].0] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].1 < self.heap[parent].1 {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl<P> Default for IndexedMinHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut queue = IndexedMinHeap::with_capacity(5);
        queue.push(0, 4.0);
        queue.push(1, 1.0);
        queue.push(2, 3.0);
        queue.push(3, 2.0);
        queue.push(4, 0.5);

        let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|(item, _)| item)).collect();
        assert_eq!(order, vec![4, 1, 3, 2, 0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn decrease_key_moves_item_forward() {
        let mut queue = IndexedMinHeap::with_capacity(3);
        queue.push(0, 5.0);
        queue.push(1, 3.0);
        queue.push(2, 4.0);

        assert!(queue.decrease_key(0, 1.0));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some((0, 1.0)));
        assert_eq!(queue.pop(), Some((1, 3.0)));
    }

    #[test]
    fn decrease_key_ignores_higher_priority_and_missing_items() {
        let mut queue = IndexedMinHeap::with_capacity(2);
        queue.push(0, 2.0);
        assert!(!queue.decrease_key(0, 3.0));
        assert!(!queue.decrease_key(0, 2.0));
        assert!(!queue.decrease_key(1, 0.0));
        assert_eq!(queue.pop(), Some((0, 2.0)));
    }

    #[test]
    fn push_of_queued_item_never_duplicates() {
        let mut queue = IndexedMinHeap::new();
        assert!(queue.push(7, 10.0));
        assert!(queue.push(7, 6.0));
        assert!(!queue.push(7, 8.0));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some((7, 6.0)));
        assert!(!queue.contains(7));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn popped_item_can_be_pushed_again() {
        let mut queue = IndexedMinHeap::with_capacity(2);
        queue.push(1, 1.0);
        assert_eq!(queue.pop(), Some((1, 1.0)));
        assert!(queue.push(1, 2.0));
        assert!(queue.contains(1));
    }
}
