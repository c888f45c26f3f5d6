//! Frontier for the cost-driven searches.

use std::collections::HashMap;
use std::hash::Hash;

use crate::numtraits::IntoOrd;

/// Frontier of discovered but not yet settled nodes.
/// Internally an indexed binary min-heap: a hashmap-based index links every tag to its heap slot,
/// so the cost of a resident node can be decreased in O(log n).
///
/// Items with equal cost pop in ascending tag order.
pub(crate) struct Frontier<T, W> {
    /// Binary heap with the least cost item at position 0.
    heap: Vec<(T, W)>,

    /// Links node tag `<T>` to its position in the `heap`.
    index: HashMap<T, usize>,
}

impl<T, W> Frontier<T, W> where T: Clone + Ord + Eq + Hash, W: Clone + PartialOrd + IntoOrd {
    /// Create new empty instance.
    pub fn new() -> Frontier<T, W> {
        Frontier {
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Sorts by cost in ascending order, then by tag.
    fn key_fn(item: &(T, W)) -> impl Ord {
        let (t, w) = item;
        (w.clone().into_ord(), t.clone())
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        Self::key_fn(&self.heap[a]) < Self::key_fn(&self.heap[b])
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, tag: &T) -> bool {
        self.index.contains_key(tag)
    }

    /// Node with the least cost, without removing it.
    pub fn peek(&self) -> Option<(&T, &W)> {
        self.heap.first().map(|(t, w)| (t, w))
    }

    /// Insert a node with associated cost into the priority queue.
    /// The node must not be in the queue yet.
    pub fn push(&mut self, tag: T, weight: W) {
        debug_assert!(!self.contains(&tag), "Node is already in the frontier");
        let pos = self.heap.len();
        self.index.insert(tag.clone(), pos);
        self.heap.push((tag, weight));
        self.sift_up(pos);
    }

    /// Extract node with the least cost from the queue.
    pub fn pop(&mut self) -> Option<(T, W)> {
        if self.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (tag, weight) = self.heap.pop()?;
        self.index.remove(&tag);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((tag, weight))
    }

    /// Extract node with the least cost unless that node is `stop`.
    /// Returns `None` when the queue is empty or `stop` is at its top.
    pub fn pop_unless(&mut self, stop: &T) -> Option<(T, W)> {
        let stopped = match self.peek() {
            Some((tag, _)) => tag == stop,
            None => true,
        };
        if stopped {
            None
        } else {
            self.pop()
        }
    }

    /// Lower the cost of a node already in the queue.
    /// Returns `true` if the node is resident and its cost was updated.
    pub fn decrease_cost(&mut self, tag: &T, new_cost: W) -> bool {
        match self.index.get(tag) {
            Some(&i) if new_cost < self.heap[i].1 => {
                self.heap[i].1 = new_cost;
                self.sift_up(i);
                true
            }
            _ => false,
        }
    }

    /// Insert a node if it is not in the queue yet,
    /// otherwise update associated cost if the new cost is less that existing.
    /// Returns `true` if the node was either inserted or updated,
    /// otherwise (node existed and current cost is less that the new one) `false`.
    pub fn try_insert_or_decrease_cost(&mut self, tag: &T, new_cost: W) -> bool {
        if self.contains(tag) {
            self.decrease_cost(tag, new_cost)
        } else {
            self.push(tag.clone(), new_cost);
            true
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut least = pos;
            if left < len && self.less(left, least) {
                least = left;
            }
            if right < len && self.less(right, least) {
                least = right;
            }
            if least == pos {
                break;
            }
            self.swap(pos, least);
            pos = least;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(i) = self.index.get_mut(&self.heap[a].0) {
            *i = a;
        }
        if let Some(i) = self.index.get_mut(&self.heap[b].0) {
            *i = b;
        }
    }
}

#[test]
fn test_push_pop() {
    let mut f = Frontier::new();
    assert_eq!(f.pop(), None);

    f.push("N", 1.0);
    assert_eq!(f.pop(), Some(("N", 1.0)));
    assert_eq!(f.pop(), None);

    f.push("A", 1.0);
    f.push("B", 2.0);
    assert_eq!(f.pop(), Some(("A", 1.0)));
    assert_eq!(f.pop(), Some(("B", 2.0)));
    assert_eq!(f.pop(), None);

    f.push("X", 2.0);
    f.push("Y", 1.0);
    assert_eq!(f.peek(), Some((&"Y", &1.0)));
    assert_eq!(f.pop_unless(&"Y"), None);
    assert_eq!(f.pop_unless(&"X"), Some(("Y", 1.0)));
    assert_eq!(f.pop_unless(&"X"), None);
    assert_eq!(f.pop(), Some(("X", 2.0)));
    assert_eq!(f.pop(), None);
    assert_eq!(f.pop_unless(&"X"), None);
    assert!(f.is_empty());
}

#[test]
fn test_equal_cost_pops_in_tag_order() {
    let mut f = Frontier::new();
    for &tag in &[7usize, 3, 9, 1, 5] {
        f.push(tag, 4i64);
    }
    f.push(8, 2);
    let order = std::iter::from_fn(|| f.pop().map(|(t, _)| t)).collect::<Vec<_>>();
    assert_eq!(order, vec![8, 1, 3, 5, 7, 9]);
}

#[test]
fn test_decrease_cost() {
    let mut f = Frontier::new();
    assert_eq!(f.pop(), None);

    assert_eq!(f.try_insert_or_decrease_cost(&"A", 1.0), true);
    assert_eq!(f.pop(), Some(("A", 1.0)));
    assert_eq!(f.pop(), None);

    f.push("B", 2.0);
    assert_eq!(f.try_insert_or_decrease_cost(&"A", 1.0), true);
    assert_eq!(f.pop(), Some(("A", 1.0)));
    assert_eq!(f.pop(), Some(("B", 2.0)));
    assert_eq!(f.pop(), None);

    f.push("X", 1.0);
    assert_eq!(f.try_insert_or_decrease_cost(&"X", 2.0), false);
    assert_eq!(f.decrease_cost(&"X", 1.0), false);
    assert_eq!(f.decrease_cost(&"Z", 0.5), false);
    assert_eq!(f.pop(), Some(("X", 1.0)));
    assert_eq!(f.pop(), None);

    f.push("X", 1.0);
    f.push("Y", 3.0);
    assert_eq!(f.try_insert_or_decrease_cost(&"Y", 2.0), true);
    assert_eq!(f.peek(), Some((&"X", &1.0)));
    assert_eq!(f.pop(), Some(("X", 1.0)));
    assert_eq!(f.pop(), Some(("Y", 2.0)));
    assert_eq!(f.pop(), None);

    f.push("X", 2.0);
    f.push("Y", 3.0);
    assert_eq!(f.decrease_cost(&"Y", 1.0), true);
    assert_eq!(f.pop(), Some(("Y", 1.0)));
    assert_eq!(f.pop(), Some(("X", 2.0)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_heap_order_with_many_updates() {
    let mut f = Frontier::new();
    for tag in 0..50u32 {
        f.push(tag, 1000 - (tag as i64) * 7 % 97);
    }
    for tag in (0..50u32).step_by(3) {
        assert!(f.decrease_cost(&tag, -(tag as i64)));
    }
    assert!(f.contains(&3));
    let mut prev = None;
    while let Some((tag, cost)) = f.pop() {
        assert!(!f.contains(&tag));
        if let Some(p) = prev {
            assert!(p <= (cost, tag));
        }
        prev = Some((cost, tag));
    }
    assert!(f.is_empty());
}
