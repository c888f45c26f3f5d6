//! Nodes and arcs.

use std::fmt;

use crate::position::Position;

/// Arc weight. Negative weights are rejected by the graph.
pub type Weight = i64;

/// Cumulative path cost (sum of arc weights).
pub type Cost = i64;

/// Handle of a node: the index of the slot the node occupies in its graph.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Directed weighted arc, owned by its source node.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Arc {
    target: NodeId,
    weight: Weight,
}

impl Arc {
    pub(crate) fn new(target: NodeId, weight: Weight) -> Self {
        Arc { target, weight }
    }

    /// Destination node of this arc.
    #[inline]
    pub fn target(&self) -> NodeId {
        self.target
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Graph node: payload, position, traversal mark and outgoing arcs.
///
/// The mark is the persistent one used by depth-first and breadth-first traversals.
/// Cost-based searches keep their marks in a per-search context instead.
#[derive(Clone, PartialEq, Debug)]
pub struct Node<P> {
    payload: P,
    position: Position,
    marked: bool,
    arcs: Vec<Arc>,
}

impl<P> Node<P> {
    pub(crate) fn new(payload: P, position: Position) -> Self {
        Node {
            payload,
            position,
            marked: false,
            arcs: Vec::new(),
        }
    }

    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn set_payload(&mut self, payload: P) {
        self.payload = payload;
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[inline]
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn set_marked(&mut self, marked: bool) {
        self.marked = marked;
    }

    /// Outgoing arcs in the order they were added.
    #[inline]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Find the arc pointing to `target`, if any.
    pub fn arc_to(&self, target: NodeId) -> Option<&Arc> {
        self.arcs.iter().find(|arc| arc.target == target)
    }

    pub(crate) fn push_arc(&mut self, arc: Arc) {
        self.arcs.push(arc);
    }

    /// Removes the arc pointing to `target`. There is at most one such arc.
    pub(crate) fn take_arc(&mut self, target: NodeId) -> Option<Arc> {
        let pos = self.arcs.iter().position(|arc| arc.target == target)?;
        Some(self.arcs.remove(pos))
    }
}

#[test]
fn test_node_arcs() {
    let mut node = Node::new("A", Position::default());
    assert!(!node.is_marked());
    assert!(node.arcs().is_empty());

    node.push_arc(Arc::new(NodeId(2), 7));
    node.push_arc(Arc::new(NodeId(1), 3));
    assert_eq!(node.arcs().iter().map(Arc::target).collect::<Vec<_>>(), vec![NodeId(2), NodeId(1)]);
    assert_eq!(node.arc_to(NodeId(1)).map(Arc::weight), Some(3));
    assert_eq!(node.arc_to(NodeId(5)), None);

    assert_eq!(node.take_arc(NodeId(2)), Some(Arc::new(NodeId(2), 7)));
    assert_eq!(node.take_arc(NodeId(2)), None);
    assert_eq!(node.arcs(), &[Arc::new(NodeId(1), 3)]);
}

#[test]
fn test_node_id_display() {
    assert_eq!(NodeId(42).to_string(), "#42");
    assert_eq!(NodeId::from(3).index(), 3);
}
