use crate::Result;
use std::fmt::Debug;

/// A min-priority queue with an in-place decrease-key.
///
/// Items are small integer payloads (vertex ids). Inserting an item yields a
/// stable handle for a later [`decrease_key`](PriorityQueue::decrease_key);
/// for the indexed binary heap the handle is the item itself, for the
/// Fibonacci heap it is a node reference. An item must hold at most one live
/// entry at a time; reusing a handle after its entry was extracted is either
/// ignored or rejected, never allowed to corrupt the queue.
pub trait PriorityQueue<K: Ord + Copy> {
    /// Stable handle to a live entry
    type Handle: Copy + Eq + Debug;

    /// Inserts an item with the given key and returns its handle
    fn insert(&mut self, item: usize, key: K) -> Result<Self::Handle>;

    /// Removes and returns the entry with the smallest key, or `None` if the
    /// queue is empty
    fn extract_min(&mut self) -> Option<(usize, K)>;

    /// Lowers the key of a live entry in place
    fn decrease_key(&mut self, handle: Self::Handle, key: K) -> Result<()>;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool;

    /// Returns the number of live entries
    fn len(&self) -> usize;
}
