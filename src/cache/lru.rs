//! LRU Tracker Module
//!
//! Recency list for cache eviction: an arena-backed doubly-linked list of keys.
//! Every node is addressed by a stable [`NodeIndex`] so the store can splice an
//! entry to the front, or unlink it, in O(1).

/// Handle to a node in the recency list.
pub type NodeIndex = usize;

/// Sentinel for "no neighbour".
const NULL_INDEX: NodeIndex = usize::MAX;

#[derive(Debug)]
struct LruNode<K> {
    /// `None` while the slot sits on the free list
    key: Option<K>,
    /// Towards the front (more recently used)
    prev: NodeIndex,
    /// Towards the back (less recently used)
    next: NodeIndex,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Vacated slots are recycled through a free list.
#[derive(Debug)]
pub struct LruTracker<K> {
    nodes: Vec<LruNode<K>>,
    free_list: Vec<NodeIndex>,
    head: NodeIndex,
    tail: NodeIndex,
    len: usize,
}

impl<K> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            head: NULL_INDEX,
            tail: NULL_INDEX,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a key as the most recently used and returns its handle.
    pub fn push_front(&mut self, key: K) -> NodeIndex {
        let node = LruNode {
            key: Some(key),
            prev: NULL_INDEX,
            next: NULL_INDEX,
        };
        let idx = match self.free_list.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the node as most recently used. Vacant handles are ignored.
    pub fn move_to_front(&mut self, idx: NodeIndex) {
        if idx == self.head || !self.is_occupied(idx) {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Unlinks a node and returns its key, or `None` if the handle is vacant.
    pub fn remove(&mut self, idx: NodeIndex) -> Option<K> {
        if !self.is_occupied(idx) {
            return None;
        }
        self.unlink(idx);
        self.free_list.push(idx);
        self.len -= 1;
        self.nodes[idx].key.take()
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn pop_back(&mut self) -> Option<K> {
        if self.tail == NULL_INDEX {
            return None;
        }
        self.remove(self.tail)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every node and releases the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = NULL_INDEX;
        self.tail = NULL_INDEX;
        self.len = 0;
    }

    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tracker: self,
            cursor: self.head,
        }
    }

    fn is_occupied(&self, idx: NodeIndex) -> bool {
        self.nodes.get(idx).is_some_and(|node| node.key.is_some())
    }

    fn link_front(&mut self, idx: NodeIndex) {
        let old_head = self.head;
        {
            let node = &mut self.nodes[idx];
            node.prev = NULL_INDEX;
            node.next = old_head;
        }
        if old_head != NULL_INDEX {
            self.nodes[old_head].prev = idx;
        }
        self.head = idx;
        if self.tail == NULL_INDEX {
            self.tail = idx;
        }
    }

    fn unlink(&mut self, idx: NodeIndex) {
        let (prev, next) = {
            let node = &self.nodes[idx];
            (node.prev, node.next)
        };
        if prev != NULL_INDEX {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NULL_INDEX {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
        let node = &mut self.nodes[idx];
        node.prev = NULL_INDEX;
        node.next = NULL_INDEX;
    }
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over tracked keys, most recently used first.
pub struct Iter<'a, K> {
    tracker: &'a LruTracker<K>,
    cursor: NodeIndex,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tracker.nodes.get(self.cursor)?;
        self.cursor = node.next;
        node.key.as_ref()
    }
}
