use crate::data_structures::PriorityQueue;
use crate::{Error, Result};

/// Sentinel in the position index for "not currently in the heap".
const NOT_PRESENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry<K> {
    item: usize,
    key: K,
}

/// Array-backed binary min-heap with an item-to-position index.
///
/// The index makes decrease-key O(log n): an item's slot is found in O(1)
/// and sifted up from there. Capacity is fixed at construction; items must
/// be ids in `0..capacity` and each item may hold at most one live entry.
///
/// All bounds are true worst-case, not amortized: insert, extract-min and
/// decrease-key are O(log n), the emptiness check is O(1).
#[derive(Debug)]
pub struct IndexedBinaryHeap<K> {
    /// Complete binary tree by array position
    heap: Vec<Entry<K>>,

    /// pos[item] = position of the item's entry in `heap`, or NOT_PRESENT
    pos: Vec<usize>,
}

impl<K: Ord + Copy> IndexedBinaryHeap<K> {
    /// Creates a heap able to hold entries for items `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedBinaryHeap {
            heap: Vec::with_capacity(capacity),
            pos: vec![NOT_PRESENT; capacity],
        }
    }

    /// Maximum number of simultaneous entries
    pub fn capacity(&self) -> usize {
        self.pos.len()
    }

    /// Returns true if the item currently holds a live entry
    pub fn contains(&self, item: usize) -> bool {
        self.pos.get(item).is_some_and(|&p| p != NOT_PRESENT)
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a].item] = a;
        self.pos[self.heap[b].item] = b;
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent].key <= self.heap[idx].key {
                break;
            }
            self.swap_entries(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            // Left child wins ties, matching textbook extract-min order.
            if left < self.heap.len() && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.swap_entries(idx, smallest);
            idx = smallest;
        }
    }
}

impl<K: Ord + Copy> PriorityQueue<K> for IndexedBinaryHeap<K> {
    /// The item id doubles as the handle; the position index resolves it.
    type Handle = usize;

    fn insert(&mut self, item: usize, key: K) -> Result<usize> {
        if item >= self.pos.len() {
            return Err(Error::InvalidVertex(item));
        }
        if self.heap.len() >= self.pos.len() {
            return Err(Error::HeapFull {
                capacity: self.pos.len(),
            });
        }
        debug_assert!(!self.contains(item), "item {item} already has a live entry");

        let idx = self.heap.len();
        self.heap.push(Entry { item, key });
        self.pos[item] = idx;
        self.sift_up(idx);
        Ok(item)
    }

    fn extract_min(&mut self) -> Option<(usize, K)> {
        if self.heap.is_empty() {
            return None;
        }

        let min = self.heap[0];
        self.pos[min.item] = NOT_PRESENT;

        if let Some(last) = self.heap.pop() {
            if !self.heap.is_empty() {
                self.heap[0] = last;
                self.pos[last.item] = 0;
                self.sift_down(0);
            }
        }

        Some((min.item, min.key))
    }

    /// No-op when the item is not in the heap or the key is not strictly
    /// smaller than the current one.
    fn decrease_key(&mut self, item: usize, key: K) -> Result<()> {
        let idx = match self.pos.get(item) {
            Some(&p) if p != NOT_PRESENT => p,
            _ => return Ok(()),
        };
        if self.heap[idx].key <= key {
            return Ok(());
        }

        self.heap[idx].key = key;
        self.sift_up(idx);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
