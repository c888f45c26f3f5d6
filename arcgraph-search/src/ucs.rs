//! Uniform-cost search.

use arcgraph_core::{Cost, Graph, NodeId};
use log::{debug, info};

use crate::context::SearchState;
use crate::errors::{search_node, Result};
use crate::frontier::Frontier;
use crate::numtraits::Zero;
use crate::path::SearchOutcome;
use crate::visitor::Visitor;

/// Share of the path cost recorded as the node estimate by uniform-cost search.
/// Informational only, it never affects the search order.
const ESTIMATE_RATIO: f64 = 0.9;

/// Find the cheapest path from `start` to `goal`.
///
/// The visitor is called on every node as it is settled. The goal itself is not visited:
/// the search stops as soon as the goal is the cheapest node in the frontier.
pub fn uniform_cost_search<P, V: Visitor<P>>(graph: &Graph<P>, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome> {
    search_node(graph, start)?;
    search_node(graph, goal)?;

    // Algorithm state
    let mut state = SearchState::new(graph.capacity());
    let mut frontier = Frontier::<NodeId, Cost>::new();

    // Add the starting point to the frontier, it will be the first node settled
    state.set_cost(start, Cost::ZERO, None);
    state.mark(start);
    frontier.push(start, Cost::ZERO);

    while let Some((top, top_cost)) = frontier.pop_unless(&goal) {
        state.settle(top);
        let node = match graph.node(top) {
            Some(node) => node,
            None => continue,
        };
        debug!("UCS settled {} at cost {}", top, top_cost);
        visitor.visit(top, node);

        for arc in node.arcs() {
            let child = arc.target();
            // Settled nodes already have their final cost
            if state.is_settled(child) {
                continue;
            }

            // Unmarked nodes have no cost yet, so they always get relaxed and inserted here
            let candidate = top_cost.saturating_add(arc.weight());
            if state.cost(child).map_or(true, |cost| candidate < cost) {
                debug!("UCS relaxed {} via {} to cost {}", child, top, candidate);
                if !state.is_marked(child) {
                    state.mark(child);
                }
                state.set_cost(child, candidate, Some(top));
                state.set_estimate(child, ESTIMATE_RATIO * candidate as f64);
                frontier.try_insert_or_decrease_cost(&child, candidate);
            }
        }
    }

    let outcome = SearchOutcome::reconstruct(state, start, goal)?;
    info!("UCS {} -> {}: {} hops, cost {}", start, goal, outcome.path().hops(), outcome.path().cost());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use arcgraph_core::{Graph, NodeId, Position};

    use crate::context::Phase;
    use crate::errors::SearchError;
    use crate::test_graphs::{abcd, assert_valid_walk, ids};
    use crate::visitor::VisitLog;

    use super::*;

    #[test]
    fn test_abcd() {
        let g = abcd();
        let mut log = VisitLog::new();
        let outcome = uniform_cost_search(&g, NodeId(0), NodeId(2), &mut log).unwrap();
        let path = outcome.path();
        assert_eq!(path.reverse_nodes(), ids(&[2, 1, 0]).as_slice());
        assert_eq!(path.forward(), ids(&[0, 1, 2]));
        assert_eq!(path.cost(), 2);
        assert_valid_walk(&g, path, NodeId(0), NodeId(2));

        // A and B are settled, C is reached, D stays in the frontier
        assert_eq!(log.visited(), ids(&[0, 1]).as_slice());
        let state = outcome.state();
        assert_eq!(state.phase(NodeId(2)), Phase::Frontier);
        assert_eq!(state.phase(NodeId(3)), Phase::Frontier);
        assert_eq!(state.cost(NodeId(3)), Some(5));
        assert_eq!(state.estimate(NodeId(2)), 0.9 * 2.0);
        assert_eq!(state.estimate(NodeId(0)), 0.0);
        assert_eq!(state.previous(NodeId(0)), None);
    }

    #[test]
    fn test_decrease_key() {
        // A->C is expensive, A->B->C is cheaper and found later
        let mut g = Graph::new(4);
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            g.add_node(*name, Position::default(), i).unwrap();
        }
        g.add_arc(NodeId(0), NodeId(2), 10).unwrap();
        g.add_arc(NodeId(0), NodeId(1), 1).unwrap();
        g.add_arc(NodeId(1), NodeId(2), 2).unwrap();
        g.add_arc(NodeId(2), NodeId(3), 1).unwrap();
        let mut log = VisitLog::new();
        let outcome = uniform_cost_search(&g, NodeId(0), NodeId(3), &mut log).unwrap();
        assert_eq!(outcome.path().forward(), ids(&[0, 1, 2, 3]));
        assert_eq!(outcome.path().cost(), 4);
        assert_eq!(outcome.state().previous(NodeId(2)), Some(NodeId(1)));
        assert_eq!(log.visited(), ids(&[0, 1, 2]).as_slice());
    }

    #[test]
    fn test_equal_costs_break_ties_by_handle() {
        let mut g = Graph::new(4);
        for i in 0..4 {
            g.add_node(i, Position::default(), i).unwrap();
        }
        g.add_arc(NodeId(0), NodeId(2), 1).unwrap();
        g.add_arc(NodeId(0), NodeId(1), 1).unwrap();
        g.add_arc(NodeId(2), NodeId(3), 1).unwrap();
        g.add_arc(NodeId(1), NodeId(3), 1).unwrap();
        let mut log = VisitLog::new();
        let outcome = uniform_cost_search(&g, NodeId(0), NodeId(3), &mut log).unwrap();
        assert_eq!(log.visited(), ids(&[0, 1, 2]).as_slice());
        assert_eq!(outcome.path().forward(), ids(&[0, 1, 3]));
    }

    #[test]
    fn test_no_path_and_invalid_nodes() {
        let mut g = abcd();
        let mut log = VisitLog::new();
        assert_eq!(
            uniform_cost_search(&g, NodeId(2), NodeId(0), &mut log).map(|o| o.into_path()),
            Err(SearchError::NoPath(NodeId(2), NodeId(0)))
        );
        assert_eq!(log.visited(), ids(&[2]).as_slice());

        g.remove_node(NodeId(1)).unwrap();
        assert_eq!(
            uniform_cost_search(&g, NodeId(1), NodeId(2), &mut log).map(|o| o.into_path()),
            Err(SearchError::InvalidNode(NodeId(1)))
        );
        // Without B, the only way is through D
        let outcome = uniform_cost_search(&g, NodeId(0), NodeId(2), &mut log).unwrap();
        assert_eq!(outcome.path().forward(), ids(&[0, 3, 2]));
        assert_eq!(outcome.path().cost(), 6);
    }

    #[test]
    fn test_start_is_goal() {
        let g = abcd();
        let mut log = VisitLog::new();
        let outcome = uniform_cost_search(&g, NodeId(3), NodeId(3), &mut log).unwrap();
        assert_eq!(outcome.path().forward(), ids(&[3]));
        assert_eq!(outcome.path().cost(), 0);
        assert!(log.visited().is_empty());
    }

    #[test]
    fn test_zero_weights_and_cycles() {
        let mut g = Graph::new(3);
        for i in 0..3 {
            g.add_node(i, Position::default(), i).unwrap();
        }
        g.add_arc(NodeId(0), NodeId(1), 0).unwrap();
        g.add_arc(NodeId(1), NodeId(0), 0).unwrap();
        g.add_arc(NodeId(1), NodeId(1), 0).unwrap();
        g.add_arc(NodeId(1), NodeId(2), 0).unwrap();
        let mut log = VisitLog::new();
        let outcome = uniform_cost_search(&g, NodeId(0), NodeId(2), &mut log).unwrap();
        assert_eq!(outcome.path().forward(), ids(&[0, 1, 2]));
        assert_eq!(outcome.path().cost(), 0);
    }
}
