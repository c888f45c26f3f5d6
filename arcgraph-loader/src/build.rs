//! Graph construction from parsed records.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use arcgraph_core::{Graph, NodeId};
use log::{debug, warn};

use crate::errors::{LoadError, Result};
use crate::parse::{parse_arcs, parse_nodes, ArcRecord, NodeRecord};

/// Build a graph from node and arc records.
///
/// Node `i` of `nodes` goes to slot `i`. The graph capacity defaults to the number of nodes.
pub fn build_graph(nodes: &[NodeRecord], arcs: &[ArcRecord], capacity: Option<usize>) -> Result<Graph<String>> {
    let capacity = capacity.unwrap_or_else(|| nodes.len());
    if nodes.len() > capacity {
        return Err(LoadError::CapacityExceeded { nodes: nodes.len(), capacity });
    }

    let mut graph = Graph::new(capacity);
    let mut names = HashSet::new();
    for (index, record) in nodes.iter().enumerate() {
        if !names.insert(record.name.as_str()) {
            warn!("Line {}: node name '{}' is already taken, lookups by name find the first one", record.line, record.name);
        }
        graph
            .add_node(record.name.clone(), record.position, index)
            .map_err(|source| LoadError::Rejected { line: record.line, source })?;
    }

    for record in arcs {
        graph
            .add_arc(NodeId(record.from), NodeId(record.to), record.weight)
            .map_err(|source| LoadError::Rejected { line: record.line, source })?;
    }

    debug!("Built graph: {} nodes, {} arcs, capacity {}", graph.len(), graph.arc_count(), graph.capacity());
    Ok(graph)
}

/// Read a node list file and an arc list file and build the graph they describe.
pub fn load_graph<N: AsRef<Path>, A: AsRef<Path>>(nodes_path: N, arcs_path: A, capacity: Option<usize>) -> Result<Graph<String>> {
    let nodes_path = nodes_path.as_ref();
    let arcs_path = arcs_path.as_ref();
    let nodes = parse_nodes(&read_file(nodes_path)?)?;
    let arcs = parse_arcs(&read_file(arcs_path)?)?;
    debug!("Read {} node records from {:?} and {} arc records from {:?}", nodes.len(), nodes_path, arcs.len(), arcs_path);
    build_graph(&nodes, &arcs, capacity)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}
