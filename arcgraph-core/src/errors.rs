//! Graph mutation errors.

use thiserror::Error;

use crate::node::{NodeId, Weight};

/// Result type alias.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for graph mutations.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Slot {0} is out of range for graph capacity {1}")]
    SlotOutOfRange(NodeId, usize),

    #[error("Slot {0} is already occupied")]
    SlotOccupied(NodeId),

    #[error("Slot {0} is empty")]
    SlotEmpty(NodeId),

    #[error("Node {0} has a non-finite position")]
    NonFinitePosition(NodeId),

    #[error("Arc {0} -> {1} already exists")]
    DuplicateArc(NodeId, NodeId),

    #[error("Arc {0} -> {1} not found")]
    ArcNotFound(NodeId, NodeId),

    #[error("Negative arc weight {weight} for {from} -> {to}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: Weight },
}
