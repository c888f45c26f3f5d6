//! Node visitors.

use arcgraph_core::{Node, NodeId};

/// Callback invoked by traversals and searches on every node they visit.
///
/// Any `FnMut(NodeId, &Node<P>)` closure is a visitor.
pub trait Visitor<P> {
    fn visit(&mut self, id: NodeId, node: &Node<P>);
}

impl<P, F> Visitor<P> for F where F: FnMut(NodeId, &Node<P>) {
    fn visit(&mut self, id: NodeId, node: &Node<P>) {
        self(id, node)
    }
}

/// Visitor recording the handles of visited nodes, in visit order.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct VisitLog {
    visited: Vec<NodeId>,
}

impl VisitLog {
    pub fn new() -> Self {
        VisitLog::default()
    }

    pub fn visited(&self) -> &[NodeId] {
        &self.visited
    }

    pub fn into_inner(self) -> Vec<NodeId> {
        self.visited
    }
}

impl<P> Visitor<P> for VisitLog {
    fn visit(&mut self, id: NodeId, _node: &Node<P>) {
        self.visited.push(id);
    }
}
