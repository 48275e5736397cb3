//! Fibonacci heap over an index-addressed node arena.
//!
//! The classic pointer structure (circular doubly-linked sibling lists,
//! parent/child links) is kept, but every link is an index into an arena
//! `Vec` instead of a raw pointer. Freed slots go onto an explicit free list
//! and carry a generation counter, so a handle that outlives its entry is
//! detected instead of silently aliasing a reused node. Dropping the heap
//! drops the arena, which releases every node without any tree traversal.

use crate::data_structures::PriorityQueue;
use crate::{Error, Result};

/// log2 of the golden ratio, for sizing the consolidation degree table
const LOG2_PHI: f64 = 0.694_241_913_630_617_4;

type Idx = u32;

/// Stable reference to a live heap entry, usable for decrease-key.
///
/// The generation counter guards against reuse after extraction: once the
/// entry is extracted its slot's generation is bumped, and any surviving
/// handle is rejected with [`Error::StaleHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibHandle {
    idx: Idx,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    item: usize,
    /// Absent iff the node is in the root list
    parent: Option<Idx>,
    /// Designated child; absent iff the node has no children
    child: Option<Idx>,
    left: Idx,
    right: Idx,
    /// Number of children
    degree: u32,
    /// Set when the node lost a child since it last became a child itself
    mark: bool,
}

#[derive(Debug, Clone)]
struct Slot<K> {
    generation: u32,
    node: Node<K>,
}

/// Min-heap forest with O(1) amortized insert and decrease-key and
/// O(log n) amortized extract-min.
#[derive(Debug)]
pub struct FibonacciHeap<K> {
    slots: Vec<Slot<K>>,
    /// Indices of vacant slots, reused before the arena grows
    free: Vec<Idx>,
    /// Root holding the current minimum key, or none if empty
    min: Option<Idx>,
    len: usize,
}

impl<K: Ord + Copy> FibonacciHeap<K> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        FibonacciHeap {
            slots: Vec::new(),
            free: Vec::new(),
            min: None,
            len: 0,
        }
    }

    fn node(&self, idx: Idx) -> &Node<K> {
        &self.slots[idx as usize].node
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<K> {
        &mut self.slots[idx as usize].node
    }

    fn alloc(&mut self, key: K, item: usize) -> Idx {
        let idx = match self.free.pop() {
            Some(idx) => idx,
            None => {
                let idx = self.slots.len() as Idx;
                self.slots.push(Slot {
                    generation: 0,
                    node: Node {
                        key,
                        item,
                        parent: None,
                        child: None,
                        left: idx,
                        right: idx,
                        degree: 0,
                        mark: false,
                    },
                });
                return idx;
            }
        };
        self.slots[idx as usize].node = Node {
            key,
            item,
            parent: None,
            child: None,
            left: idx,
            right: idx,
            degree: 0,
            mark: false,
        };
        idx
    }

    /// Invalidates outstanding handles to the slot and recycles it
    fn release(&mut self, idx: Idx) {
        self.slots[idx as usize].generation = self.slots[idx as usize].generation.wrapping_add(1);
        self.free.push(idx);
    }

    /// Collects a sibling ring into a vector, starting at `start`.
    ///
    /// Splice operations mutate the ring while it is being processed, so
    /// callers iterate over this snapshot rather than the live links.
    fn siblings(&self, start: Idx) -> Vec<Idx> {
        let mut out = vec![start];
        let mut current = self.node(start).right;
        while current != start {
            out.push(current);
            current = self.node(current).right;
        }
        out
    }

    /// Splices `x` into the root list next to the minimum and clears its
    /// parent link. Sets the minimum when the root list was empty; callers
    /// are responsible for any key comparison against the current minimum.
    fn add_to_root_list(&mut self, x: Idx) {
        match self.min {
            None => {
                let node = self.node_mut(x);
                node.left = x;
                node.right = x;
                node.parent = None;
                self.min = Some(x);
            }
            Some(min) => {
                let min_left = self.node(min).left;
                self.node_mut(min_left).right = x;
                {
                    let node = self.node_mut(x);
                    node.left = min_left;
                    node.right = min;
                    node.parent = None;
                }
                self.node_mut(min).left = x;
            }
        }
    }

    /// Merges root trees of equal degree until every root degree is unique,
    /// then recomputes the minimum pointer.
    fn consolidate(&mut self) {
        let Some(min) = self.min else {
            return;
        };

        // Degree bound via the golden-ratio relation, +2 safety margin for
        // rounding. `len` still counts the node being extracted here, which
        // only makes the bound larger.
        let max_degree = ((self.len.max(1) as f64).log2() / LOG2_PHI).floor() as usize + 2;
        let mut table: Vec<Option<Idx>> = vec![None; max_degree];

        for mut x in self.siblings(min) {
            let mut d = self.node(x).degree as usize;
            loop {
                if d >= table.len() {
                    table.resize(d + 1, None);
                }
                let Some(mut y) = table[d].take() else {
                    table[d] = Some(x);
                    break;
                };
                // The larger key becomes the child; on equal keys `y` does.
                if self.node(x).key > self.node(y).key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                d += 1;
            }
        }

        // Rebuild the root list from the table's occupied slots
        self.min = None;
        for x in table.into_iter().flatten() {
            self.add_to_root_list(x);
            if let Some(min) = self.min {
                if self.node(x).key < self.node(min).key {
                    self.min = Some(x);
                }
            }
        }
    }

    /// Makes `y` a child of `x`. Precondition: both are roots and
    /// `x.key <= y.key`.
    fn link(&mut self, y: Idx, x: Idx) {
        // Unlink y from the root list and reset it to a singleton ring
        let (left, right) = (self.node(y).left, self.node(y).right);
        self.node_mut(left).right = right;
        self.node_mut(right).left = left;
        {
            let node = self.node_mut(y);
            node.left = y;
            node.right = y;
            node.parent = Some(x);
            node.mark = false;
        }

        // Splice y into x's child ring
        let x_child = self.node(x).child;
        match x_child {
            None => self.node_mut(x).child = Some(y),
            Some(child) => {
                let child_left = self.node(child).left;
                self.node_mut(child_left).right = y;
                {
                    let node = self.node_mut(y);
                    node.left = child_left;
                    node.right = child;
                }
                self.node_mut(child).left = y;
            }
        }
        self.node_mut(x).degree += 1;
    }

    /// Detaches `x` from its parent `y` and promotes it to the root list
    fn cut(&mut self, x: Idx, y: Idx) {
        let (left, right) = (self.node(x).left, self.node(x).right);
        if right == x {
            // x was y's only child
            self.node_mut(y).child = None;
        } else {
            self.node_mut(left).right = right;
            self.node_mut(right).left = left;
            if self.node(y).child == Some(x) {
                self.node_mut(y).child = Some(right);
            }
        }
        self.node_mut(y).degree -= 1;

        self.add_to_root_list(x);
        self.node_mut(x).mark = false;
    }

    /// Promotes marked ancestors until an unmarked or root ancestor is found
    fn cascading_cut(&mut self, mut y: Idx) {
        loop {
            let Some(z) = self.node(y).parent else {
                break;
            };
            if !self.node(y).mark {
                self.node_mut(y).mark = true;
                break;
            }
            self.cut(y, z);
            y = z;
        }
    }

    /// Exhaustively checks the structural invariants, panicking on the first
    /// violation. Intended for tests; cost is linear in the heap size.
    pub fn check_invariants(&self) {
        let Some(min) = self.min else {
            assert_eq!(self.len, 0, "empty forest but len = {}", self.len);
            return;
        };

        let mut count = 0;
        for root in self.siblings(min) {
            assert!(self.node(root).parent.is_none(), "root {root} has a parent");
            assert!(
                self.node(min).key <= self.node(root).key,
                "min pointer does not hold the smallest root key"
            );
            count += self.check_subtree(root);
        }
        assert_eq!(count, self.len, "reachable node count does not match len");
    }

    fn check_subtree(&self, idx: Idx) -> usize {
        let (left, right) = (self.node(idx).left, self.node(idx).right);
        assert_eq!(self.node(left).right, idx, "broken sibling link at {idx}");
        assert_eq!(self.node(right).left, idx, "broken sibling link at {idx}");

        let mut count = 1;
        let mut children = 0;
        if let Some(child) = self.node(idx).child {
            for c in self.siblings(child) {
                assert_eq!(self.node(c).parent, Some(idx), "wrong parent link at {c}");
                assert!(
                    self.node(idx).key <= self.node(c).key,
                    "heap order violated between {idx} and {c}"
                );
                children += 1;
                count += self.check_subtree(c);
            }
        }
        assert_eq!(children, self.node(idx).degree as usize, "degree mismatch at {idx}");
        count
    }
}

impl<K: Ord + Copy> Default for FibonacciHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy> PriorityQueue<K> for FibonacciHeap<K> {
    type Handle = FibHandle;

    /// O(1): splices a singleton next to the minimum
    fn insert(&mut self, item: usize, key: K) -> Result<FibHandle> {
        let idx = self.alloc(key, item);
        self.add_to_root_list(idx);
        if let Some(min) = self.min {
            if self.node(idx).key < self.node(min).key {
                self.min = Some(idx);
            }
        }
        self.len += 1;
        Ok(FibHandle {
            idx,
            generation: self.slots[idx as usize].generation,
        })
    }

    /// Amortized O(log n): promotes the minimum's children, then consolidates
    fn extract_min(&mut self) -> Option<(usize, K)> {
        let z = self.min?;

        // Promote all of z's children to the root list
        let child = self.node(z).child;
        if let Some(child) = child {
            for c in self.siblings(child) {
                self.add_to_root_list(c);
            }
            self.node_mut(z).child = None;
        }

        // Unlink z from the root list
        let (left, right) = (self.node(z).left, self.node(z).right);
        self.node_mut(left).right = right;
        self.node_mut(right).left = left;

        if right == z {
            self.min = None;
        } else {
            self.min = Some(right);
            self.consolidate();
        }

        self.len -= 1;
        let (item, key) = (self.node(z).item, self.node(z).key);
        self.release(z);
        Some((item, key))
    }

    /// Amortized O(1): cuts the node loose when heap order with its parent
    /// breaks, then cascades through marked ancestors
    fn decrease_key(&mut self, handle: FibHandle, key: K) -> Result<()> {
        let slot = self
            .slots
            .get(handle.idx as usize)
            .ok_or(Error::StaleHandle)?;
        if slot.generation != handle.generation {
            return Err(Error::StaleHandle);
        }
        if key > slot.node.key {
            return Err(Error::KeyIncrease);
        }

        let x = handle.idx;
        self.node_mut(x).key = key;
        let parent = self.node(x).parent;
        if let Some(parent) = parent {
            if self.node(x).key < self.node(parent).key {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min {
            if self.node(x).key < self.node(min).key {
                self.min = Some(x);
            }
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }
}
