//! Fixed-capacity slot graph.

use crate::errors::{GraphError, Result};
use crate::node::{Arc, Node, NodeId, Weight};
use crate::position::Position;

/// Directed weighted graph with a fixed number of node slots.
///
/// Nodes are placed at caller-chosen slot indices, and the slot index doubles as the node handle.
/// There is at most one arc for every ordered `(from, to)` pair, and arcs only ever connect
/// occupied slots.
#[derive(Clone, Debug)]
pub struct Graph<P> {
    slots: Vec<Option<Node<P>>>,
    count: usize,
}

impl<P> Graph<P> {
    /// Create an empty graph able to hold `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Graph { slots, count: 0 }
    }

    /// Maximum number of nodes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `id` refers to an occupied slot.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<P>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Occupied nodes in slot order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<P>)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i), node)))
    }

    /// Handles of occupied slots in slot order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(|(id, _)| id)
    }

    /// First node (in slot order) whose payload matches the predicate.
    pub fn find_node<F: Fn(&P) -> bool>(&self, predicate: F) -> Option<NodeId> {
        self.nodes().find(|(_, node)| predicate(node.payload())).map(|(id, _)| id)
    }

    /// Put a new unmarked node into slot `index`.
    ///
    /// Fails without touching the graph if the slot is out of range or already occupied,
    /// or if either coordinate of `position` is NaN or infinite.
    pub fn add_node(&mut self, payload: P, position: Position, index: usize) -> Result<NodeId> {
        let id = NodeId(index);
        let capacity = self.capacity();
        let slot = self.slots.get_mut(index).ok_or(GraphError::SlotOutOfRange(id, capacity))?;
        if slot.is_some() {
            return Err(GraphError::SlotOccupied(id));
        }
        if !position.is_finite() {
            return Err(GraphError::NonFinitePosition(id));
        }
        *slot = Some(Node::new(payload, position));
        self.count += 1;
        Ok(id)
    }

    /// Remove a node together with every arc that points to it.
    /// The removed node (and its outgoing arcs) is returned.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node<P>> {
        let mut node = self.slots.get_mut(id.index())
            .and_then(Option::take)
            .ok_or_else(|| self.classify_missing(id))?;
        let _ = node.take_arc(id);
        self.count -= 1;

        for slot in self.slots.iter_mut() {
            if let Some(other) = slot {
                let _ = other.take_arc(id);
            }
        }

        Ok(node)
    }

    /// Add an arc `from -> to`.
    ///
    /// Fails if either end is not an occupied slot, the arc already exists or the weight is negative.
    pub fn add_arc(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.check_occupied(to)?;
        let node = self.occupied_mut(from)?;
        if node.arc_to(to).is_some() {
            return Err(GraphError::DuplicateArc(from, to));
        }
        if weight < 0 {
            return Err(GraphError::NegativeWeight { from, to, weight });
        }
        node.push_arc(Arc::new(to, weight));
        Ok(())
    }

    /// Remove the arc `from -> to` and return it.
    pub fn remove_arc(&mut self, from: NodeId, to: NodeId) -> Result<Arc> {
        self.check_occupied(to)?;
        self.occupied_mut(from)?.take_arc(to).ok_or(GraphError::ArcNotFound(from, to))
    }

    /// Find the arc `from -> to`.
    pub fn arc(&self, from: NodeId, to: NodeId) -> Option<&Arc> {
        self.node(from).and_then(|node| node.arc_to(to))
    }

    /// Unmark every node.
    pub fn clear_marks(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some(node) = slot {
                node.set_marked(false);
            }
        }
    }

    /// Total number of arcs in the graph.
    pub fn arc_count(&self) -> usize {
        self.nodes().map(|(_, node)| node.arcs().len()).sum()
    }

    fn check_occupied(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(self.classify_missing(id))
        }
    }

    fn occupied_mut(&mut self, id: NodeId) -> Result<&mut Node<P>> {
        let capacity = self.capacity();
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => Ok(node),
            Some(None) => Err(GraphError::SlotEmpty(id)),
            None => Err(GraphError::SlotOutOfRange(id, capacity)),
        }
    }

    fn classify_missing(&self, id: NodeId) -> GraphError {
        if id.index() < self.capacity() {
            GraphError::SlotEmpty(id)
        } else {
            GraphError::SlotOutOfRange(id, self.capacity())
        }
    }
}
