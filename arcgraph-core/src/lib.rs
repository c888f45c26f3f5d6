//! Weighted graph data model.
//!
//! The graph is a fixed-capacity array of node slots. Every node owns its outgoing arcs,
//! and arcs refer to their destination by [`NodeId`] handle (the slot index), never by reference,
//! so removing a node can not leave dangling arcs behind.
//!
//! ```rust
//! # use arcgraph_core::{Graph, GraphError, NodeId, Position};
//! let mut graph = Graph::new(4);
//! let a = graph.add_node("A", Position::new(0.0, 0.0), 0).unwrap();
//! let b = graph.add_node("B", Position::new(1.0, 0.0), 1).unwrap();
//! graph.add_arc(a, b, 1).unwrap();
//!
//! assert_eq!(graph.add_arc(a, b, 3), Err(GraphError::DuplicateArc(a, b)));
//! assert_eq!(graph.arc(a, b).map(|arc| arc.weight()), Some(1));
//! ```
//!
//! [`Arc`] is a weighted graph arc and has nothing to do with `std::sync::Arc`.
//! Code that needs both should import one of them under another name:
//!
//! ```rust
//! use std::sync::Arc;
//! use arcgraph_core::{Arc as GraphArc, Graph, NodeId, Position};
//!
//! let mut graph = Graph::new(2);
//! graph.add_node((), Position::default(), 0).unwrap();
//! graph.add_node((), Position::default(), 1).unwrap();
//! graph.add_arc(NodeId(0), NodeId(1), 7).unwrap();
//!
//! let shared = Arc::new(graph);
//! let arc: Option<&GraphArc> = shared.arc(NodeId(0), NodeId(1));
//! assert_eq!(arc.map(GraphArc::target), Some(NodeId(1)));
//! ```

pub use self::errors::{GraphError, Result};
pub use self::graph::Graph;
pub use self::node::{Arc, Cost, Node, NodeId, Weight};
pub use self::position::Position;

mod errors;
mod graph;
mod node;
mod position;
