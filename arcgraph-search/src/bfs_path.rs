//! Breadth-first search with path reconstruction.

use std::collections::VecDeque;

use arcgraph_core::{Graph, NodeId};
use log::{debug, info};

use crate::context::SearchState;
use crate::errors::{search_node, Result};
use crate::numtraits::Zero;
use crate::path::SearchOutcome;
use crate::visitor::Visitor;

/// Find the path from `start` to `goal` with the fewest arcs, ignoring weights.
///
/// The search stops as soon as the goal shows up among the neighbours of a dequeued node.
/// The visitor is then called on every node of the path, goal first.
/// The reported cost is the sum of the arc weights along the path.
pub fn breadth_first_with_path<P, V: Visitor<P>>(graph: &Graph<P>, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome> {
    search_node(graph, start)?;
    search_node(graph, goal)?;

    let mut state = SearchState::new(graph.capacity());
    let mut queue = VecDeque::new();
    state.set_cost(start, Zero::ZERO, None);
    state.mark(start);
    queue.push_back(start);

    let mut goal_reached = start == goal;
    while !goal_reached {
        let id = match queue.pop_front() {
            Some(id) => id,
            None => break,
        };
        state.settle(id);
        let (node, cost) = match (graph.node(id), state.cost(id)) {
            (Some(node), Some(cost)) => (node, cost),
            _ => continue,
        };

        for arc in node.arcs() {
            let target = arc.target();
            let target_cost = cost.saturating_add(arc.weight());
            if target == goal {
                state.mark(goal);
                state.set_cost(goal, target_cost, Some(id));
                goal_reached = true;
                break;
            }
            if !state.is_marked(target) {
                state.mark(target);
                state.set_cost(target, target_cost, Some(id));
                queue.push_back(target);
            }
        }
    }

    let outcome = SearchOutcome::reconstruct(state, start, goal)?;
    for &id in outcome.path().reverse_nodes() {
        if let Some(node) = graph.node(id) {
            debug!("BFS path node {}", id);
            visitor.visit(id, node);
        }
    }
    info!("BFS path {} -> {}: {} hops, cost {}", start, goal, outcome.path().hops(), outcome.path().cost());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use arcgraph_core::{Graph, NodeId, Position};

    use crate::errors::SearchError;
    use crate::test_graphs::{abcd, assert_valid_walk, ids};
    use crate::visitor::VisitLog;

    use super::*;

    #[test]
    fn test_fewest_hops() {
        let g = abcd();
        let mut log = VisitLog::new();
        let outcome = breadth_first_with_path(&g, NodeId(0), NodeId(2), &mut log).unwrap();
        let path = outcome.path();
        // A->B->C is found through B, dequeued before D
        assert_eq!(path.forward(), ids(&[0, 1, 2]));
        assert_eq!(path.cost(), 2);
        assert_eq!(log.visited(), ids(&[2, 1, 0]).as_slice());
        assert_valid_walk(&g, path, NodeId(0), NodeId(2));
    }

    #[test]
    fn test_ignores_weights() {
        let g = abcd();
        let mut log = VisitLog::new();
        let outcome = breadth_first_with_path(&g, NodeId(0), NodeId(3), &mut log).unwrap();
        assert_eq!(outcome.path().forward(), ids(&[0, 3]));
        assert_eq!(outcome.path().cost(), 5);
    }

    #[test]
    fn test_graph_marks_untouched() {
        let g = abcd();
        let mut log = VisitLog::new();
        breadth_first_with_path(&g, NodeId(0), NodeId(2), &mut log).unwrap();
        assert!(g.nodes().all(|(_, node)| !node.is_marked()));

        // A second run gives the same answer without any reset
        let mut again = VisitLog::new();
        breadth_first_with_path(&g, NodeId(0), NodeId(2), &mut again).unwrap();
        assert_eq!(log, again);
    }

    #[test]
    fn test_no_path() {
        let g = abcd();
        let mut log = VisitLog::new();
        assert_eq!(
            breadth_first_with_path(&g, NodeId(2), NodeId(0), &mut log).map(|o| o.into_path()),
            Err(SearchError::NoPath(NodeId(2), NodeId(0)))
        );
        assert!(log.visited().is_empty());
        assert_eq!(
            breadth_first_with_path(&g, NodeId(0), NodeId(4), &mut log).map(|o| o.into_path()),
            Err(SearchError::InvalidNode(NodeId(4)))
        );
    }

    #[test]
    fn test_start_is_goal() {
        let g = abcd();
        let mut log = VisitLog::new();
        let outcome = breadth_first_with_path(&g, NodeId(1), NodeId(1), &mut log).unwrap();
        assert_eq!(outcome.path().forward(), ids(&[1]));
        assert_eq!(outcome.path().cost(), 0);
        assert_eq!(log.visited(), ids(&[1]).as_slice());
    }

    #[test]
    fn test_goal_found_before_marked_check() {
        // Goal reachable through a cycle back to the start
        let mut g = Graph::new(3);
        for i in 0..3 {
            g.add_node(i, Position::default(), i).unwrap();
        }
        g.add_arc(NodeId(0), NodeId(1), 2).unwrap();
        g.add_arc(NodeId(1), NodeId(2), 3).unwrap();
        g.add_arc(NodeId(2), NodeId(0), 4).unwrap();
        let mut log = VisitLog::new();
        let outcome = breadth_first_with_path(&g, NodeId(1), NodeId(0), &mut log).unwrap();
        assert_eq!(outcome.path().forward(), ids(&[1, 2, 0]));
        assert_eq!(outcome.path().cost(), 7);
    }
}
