//! Search errors.

use arcgraph_core::{Graph, Node, NodeId};
use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error type for traversals and path searches.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Node {0} is not in the graph")]
    InvalidNode(NodeId),

    #[error("No path from {0} to {1}")]
    NoPath(NodeId, NodeId),
}

/// Look up a node a search was asked to start from or stop at.
pub(crate) fn search_node<P>(graph: &Graph<P>, id: NodeId) -> Result<&Node<P>> {
    graph.node(id).ok_or(SearchError::InvalidNode(id))
}
