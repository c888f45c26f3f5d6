//! Graph loading from text files.
//!
//! A graph is described by two files. The node list has one `name x y` record per line,
//! the n-th record going to slot n. The arc list has one `from to weight` record per line,
//! with endpoints given as slot indices. Blank lines and `#` comments are ignored.
//!
//! ```rust
//! # use arcgraph_loader::{build_graph, parse_arcs, parse_nodes};
//! let nodes = parse_nodes("A 0 0\nB 1 0\n").unwrap();
//! let arcs = parse_arcs("0 1 4\n").unwrap();
//! let graph = build_graph(&nodes, &arcs, None).unwrap();
//! assert_eq!(graph.len(), 2);
//! ```

pub use self::build::{build_graph, load_graph};
pub use self::errors::{LoadError, Result};
pub use self::parse::{parse_arcs, parse_nodes, ArcRecord, NodeRecord};

mod build;
mod errors;
mod parse;
