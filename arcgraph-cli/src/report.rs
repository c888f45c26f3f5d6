//! Running the selected algorithm and reporting its result.

use anyhow::{anyhow, Error};
use serde::Serialize;

use arcgraph_core::{Cost, Graph, NodeId};
use arcgraph_search::{GraphSearch, Path, SearchError, SearchOutcome, VisitLog};

use crate::config::Algorithm;

/// Result of a single run: visited nodes and, for path searches, the path found.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Report {
    pub algorithm: Algorithm,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub visited: Vec<String>,
    /// `None` for traversals and when the goal is unreachable.
    pub path: Option<Vec<String>>,
    pub cost: Option<Cost>,
}

impl Report {
    /// Human readable output, one line per item.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = self.visited.iter().map(|name| format!("Visiting: {}", name)).collect::<Vec<_>>();
        if let Some(ref goal) = self.goal {
            match (&self.path, self.cost) {
                (Some(path), Some(cost)) => {
                    lines.push(format!("Path: {}", path.join(" -> ")));
                    lines.push(format!("Cost: {}", cost));
                }
                _ => lines.push(format!("No path from {} to {}", self.start, goal)),
            }
        }
        lines
    }
}

/// Find a node by slot index, or else by name.
pub fn select_node(graph: &Graph<String>, text: &str) -> Result<NodeId, Error> {
    if let Ok(index) = text.parse::<usize>() {
        if graph.contains(NodeId(index)) {
            return Ok(NodeId(index));
        }
    }
    graph.find_node(|name| name == text).ok_or_else(|| anyhow!("unknown node '{}'", text))
}

/// Run `algorithm` from `start`. Path searches also need a `goal`.
pub fn run_search(graph: &mut Graph<String>, algorithm: Algorithm, start: NodeId, goal: Option<NodeId>) -> Result<Report, Error> {
    let mut log = VisitLog::new();
    let path = match (algorithm, goal) {
        (Algorithm::Dfs, _) => {
            graph.depth_first(start, &mut log)?;
            None
        }
        (Algorithm::Bfs, _) => {
            graph.breadth_first(start, &mut log)?;
            None
        }
        (_, None) => return Err(anyhow!("{:?} search needs a goal node", algorithm)),
        (Algorithm::BfsPath, Some(goal)) => found(graph.breadth_first_with_path(start, goal, &mut log))?,
        (Algorithm::Ucs, Some(goal)) => found(graph.uniform_cost_search(start, goal, &mut log))?,
        (Algorithm::Astar, Some(goal)) => found(graph.a_star(start, goal, &mut log))?,
    };

    let name = |id: NodeId| graph.node(id).map_or_else(|| id.to_string(), |node| node.payload().clone());
    Ok(Report {
        algorithm,
        start: name(start),
        goal: goal.filter(|_| algorithm.needs_goal()).map(name),
        visited: log.visited().iter().copied().map(name).collect(),
        cost: path.as_ref().map(Path::cost),
        path: path.map(|path| path.forward().into_iter().map(name).collect()),
    })
}

/// An unreachable goal is a regular outcome, not an error.
fn found(result: arcgraph_search::Result<SearchOutcome>) -> Result<Option<Path>, SearchError> {
    match result {
        Ok(outcome) => Ok(Some(outcome.into_path())),
        Err(SearchError::NoPath(..)) => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use arcgraph_loader::{build_graph, parse_arcs, parse_nodes};

    use super::*;

    fn abcd() -> Graph<String> {
        let nodes = parse_nodes("A 0 0\nB 1 0\nC 2 0\nD 2 1\n").unwrap();
        let arcs = parse_arcs("0 1 1\n1 2 1\n0 3 5\n3 2 1\n").unwrap();
        build_graph(&nodes, &arcs, None).unwrap()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_node() {
        let g = abcd();
        assert_eq!(select_node(&g, "2").unwrap(), NodeId(2));
        assert_eq!(select_node(&g, "D").unwrap(), NodeId(3));
        assert!(select_node(&g, "7").is_err());
        assert!(select_node(&g, "Z").is_err());
    }

    #[test]
    fn test_astar_report() {
        let mut g = abcd();
        let report = run_search(&mut g, Algorithm::Astar, NodeId(0), Some(NodeId(2))).unwrap();
        assert_eq!(report.visited, names(&["A", "B"]));
        assert_eq!(report.path, Some(names(&["A", "B", "C"])));
        assert_eq!(report.cost, Some(2));
        assert_eq!(report.plain_lines(), names(&["Visiting: A", "Visiting: B", "Path: A -> B -> C", "Cost: 2"]));
    }

    #[test]
    fn test_bfs_path_report() {
        let mut g = abcd();
        let report = run_search(&mut g, Algorithm::BfsPath, NodeId(0), Some(NodeId(2))).unwrap();
        assert_eq!(report.visited, names(&["C", "B", "A"]));
        assert_eq!(report.path, Some(names(&["A", "B", "C"])));
    }

    #[test]
    fn test_no_path_report() {
        let mut g = abcd();
        let report = run_search(&mut g, Algorithm::Ucs, NodeId(2), Some(NodeId(0))).unwrap();
        assert_eq!(report.path, None);
        assert_eq!(report.cost, None);
        assert_eq!(report.plain_lines(), names(&["Visiting: C", "No path from C to A"]));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "ucs");
        assert_eq!(json["goal"], "A");
        assert!(json["path"].is_null());
    }

    #[test]
    fn test_traversal_reports() {
        let mut g = abcd();
        let report = run_search(&mut g, Algorithm::Dfs, NodeId(0), Some(NodeId(2))).unwrap();
        assert_eq!(report.visited, names(&["A", "B", "C", "D"]));
        assert_eq!(report.goal, None);
        assert_eq!(report.plain_lines().len(), 4);

        let mut g = abcd();
        let report = run_search(&mut g, Algorithm::Bfs, NodeId(0), None).unwrap();
        assert_eq!(report.visited, names(&["A", "B", "D", "C"]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "bfs");
        assert!(json.get("goal").is_none());
    }

    #[test]
    fn test_missing_goal() {
        let mut g = abcd();
        assert!(run_search(&mut g, Algorithm::Ucs, NodeId(0), None).is_err());
    }
}
