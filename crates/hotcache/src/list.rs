//! Ordered item list backing the cache's recency order.
//!
//! Nodes live in a slot arena (`Vec<Option<Node>>`) and link to each other by
//! index, so every structural operation is O(1) without unsafe pointer
//! juggling. Freed slots are recycled through a free list.

/// Stable handle to a node in the list's arena.
///
/// Ids are only minted by the list itself and stay valid until the node they
/// name is removed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeId(usize);

/// Node in the doubly-linked list
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly-linked list over a slot arena.
///
/// Not synchronized; callers that share it are responsible for locking.
pub struct OrderedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free_list: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> OrderedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with arena space for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of nodes in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value at the front (most recent position)
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Value at the back (least recent position)
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Id of the front node
    pub fn front_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Id of the back node
    pub fn back_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Value stored under `id`, if the slot is occupied
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0)?.as_ref().map(|node| &node.value)
    }

    /// Mutable value stored under `id`, if the slot is occupied
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0)?.as_mut().map(|node| &mut node.value)
    }

    /// Insert a value at the front, returning its handle
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.alloc_node();
        self.nodes[id.0] = Some(Node {
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_id) = self.head {
            if let Some(head) = &mut self.nodes[head_id.0] {
                head.prev = Some(id);
            }
        }

        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }

        self.len += 1;
        id
    }

    /// Insert a value at the back, returning its handle
    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = self.alloc_node();
        self.nodes[id.0] = Some(Node {
            value,
            prev: self.tail,
            next: None,
        });

        if let Some(tail_id) = self.tail {
            if let Some(tail) = &mut self.nodes[tail_id.0] {
                tail.next = Some(id);
            }
        }

        self.tail = Some(id);
        if self.head.is_none() {
            self.head = Some(id);
        }

        self.len += 1;
        id
    }

    /// Remove the node under `id` and return its value.
    ///
    /// Returns `None` if `id` does not name a live node.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }

        self.unlink(id);
        self.free_node(id);
        self.len -= 1;
        self.nodes[id.0].take().map(|node| node.value)
    }

    /// Detach the node under `id` and reattach it at the front.
    ///
    /// The handle stays valid across the move. Returns `false` if `id` does
    /// not name a live node.
    pub fn move_to_front(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true; // Already at front
        }

        self.unlink(id);

        if let Some(node) = &mut self.nodes[id.0] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_id) = self.head {
            if let Some(head) = &mut self.nodes[head_id.0] {
                head.prev = Some(id);
            }
        }

        self.head = Some(id);
        true
    }

    /// Drop all nodes and recycle the arena
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate values front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|slot| slot.is_some())
    }

    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = if let Some(node) = &self.nodes[id.0] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = &mut self.nodes[prev_id.0] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = &mut self.nodes[next_id.0] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self) -> NodeId {
        if let Some(idx) = self.free_list.pop() {
            NodeId(idx)
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            NodeId(idx)
        }
    }

    fn free_node(&mut self, id: NodeId) {
        self.free_list.push(id.0);
    }

    /// Walk the links in both directions and assert the structural invariants.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate(&self) {
        if self.len == 0 {
            assert!(self.head.is_none() && self.tail.is_none());
            return;
        }

        let head = self.head.expect("non-empty list has a head");
        let tail = self.tail.expect("non-empty list has a tail");
        assert!(self.nodes[head.0].as_ref().unwrap().prev.is_none());
        assert!(self.nodes[tail.0].as_ref().unwrap().next.is_none());

        // Forward walk: count nodes and check prev-link symmetry.
        let mut count = 0;
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.nodes[id.0].as_ref().expect("linked slot is occupied");
            assert_eq!(node.prev, prev);
            prev = Some(id);
            cursor = node.next;
            count += 1;
            assert!(count <= self.len, "cycle in list links");
        }

        assert_eq!(count, self.len);
        assert_eq!(prev, Some(tail));
    }
}

/// Front-to-back iterator over list values
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.next?;
        let node = self.list.nodes[id.0].as_ref()?;
        self.next = node.next;
        Some(&node.value)
    }
}
