//! Search results.

use arcgraph_core::{Cost, NodeId};

use crate::context::SearchState;
use crate::errors::{Result, SearchError};

/// Path found by a goal-directed search.
///
/// Nodes are stored in reconstruction order: goal first, start last.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Path {
    rev_nodes: Vec<NodeId>,
    cost: Cost,
}

impl Path {
    pub(crate) fn new(rev_nodes: Vec<NodeId>, cost: Cost) -> Self {
        debug_assert!(!rev_nodes.is_empty(), "Empty path");
        Path { rev_nodes, cost }
    }

    /// Nodes from goal back to start.
    pub fn reverse_nodes(&self) -> &[NodeId] {
        &self.rev_nodes
    }

    /// Nodes from start to goal.
    pub fn forward(&self) -> Vec<NodeId> {
        self.rev_nodes.iter().rev().copied().collect()
    }

    pub fn start(&self) -> NodeId {
        self.rev_nodes[self.rev_nodes.len() - 1]
    }

    pub fn goal(&self) -> NodeId {
        self.rev_nodes[0]
    }

    /// Sum of the arc weights along the path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of arcs on the path.
    pub fn hops(&self) -> usize {
        self.rev_nodes.len() - 1
    }
}

/// Path together with the search context it was reconstructed from.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    path: Path,
    state: SearchState,
}

impl SearchOutcome {
    pub(crate) fn new(path: Path, state: SearchState) -> Self {
        SearchOutcome { path, state }
    }

    /// Reconstruct the path to `goal` from the back-pointers left in `state`.
    pub(crate) fn reconstruct(state: SearchState, start: NodeId, goal: NodeId) -> Result<Self> {
        let no_path = SearchError::NoPath(start, goal);
        let cost = state.cost(goal).ok_or(no_path)?;
        let rev_nodes = state.reverse_path(start, goal).ok_or(no_path)?;
        Ok(SearchOutcome::new(Path::new(rev_nodes, cost), state))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Per-node costs, estimates, phases and back-pointers left by the search.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn into_path(self) -> Path {
        self.path
    }
}

#[test]
fn test_path_views() {
    let path = Path::new(vec![NodeId(2), NodeId(1), NodeId(0)], 2);
    assert_eq!(path.forward(), vec![NodeId(0), NodeId(1), NodeId(2)]);
    assert_eq!(path.reverse_nodes(), &[NodeId(2), NodeId(1), NodeId(0)]);
    assert_eq!(path.start(), NodeId(0));
    assert_eq!(path.goal(), NodeId(2));
    assert_eq!(path.reverse_nodes().len(), path.hops() + 1);
    assert_eq!(path.hops(), 2);
    assert_eq!(path.cost(), 2);

    let trivial = Path::new(vec![NodeId(4)], 0);
    assert_eq!(trivial.start(), trivial.goal());
    assert_eq!(trivial.hops(), 0);
}
