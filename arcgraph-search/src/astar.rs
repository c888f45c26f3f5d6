//! A* search.

use arcgraph_core::{Cost, Graph, NodeId};
use log::{debug, info, warn};

use crate::context::SearchState;
use crate::errors::{search_node, Result};
use crate::frontier::Frontier;
use crate::heuristic::{Euclidean, Heuristic};
use crate::numtraits::Zero;
use crate::path::SearchOutcome;
use crate::visitor::Visitor;

/// A* search from `start` to `goal` guided by the straight line distance between node positions.
///
/// See [`a_star_with`].
pub fn a_star<P, V: Visitor<P>>(graph: &Graph<P>, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome> {
    a_star_with(graph, start, goal, &Euclidean, visitor)
}

/// A* search from `start` to `goal` with a custom heuristic.
///
/// Nodes are expanded in order of `f = g + h`, where `g` is the cost of the best known path
/// from the start and `h` the heuristic estimate towards the goal, computed once per node.
/// The path is the cheapest one as long as the heuristic is admissible, i.e. never
/// overestimates the remaining cost. A heuristic that is admissible but not consistent can
/// settle a node through a detour; such a node is reopened when a cheaper path to it shows up.
/// Non-finite estimates are treated as zero.
///
/// The visitor is called on every node as it is settled, the goal excluded. A reopened node
/// is visited again when it is settled a second time.
pub fn a_star_with<P, V, H>(graph: &Graph<P>, start: NodeId, goal: NodeId, heuristic: &H, visitor: &mut V) -> Result<SearchOutcome>
    where V: Visitor<P>, H: Heuristic + ?Sized
{
    search_node(graph, start)?;
    let goal_pos = search_node(graph, goal)?.position();

    // Algorithm state
    let mut state = SearchState::new(graph.capacity());
    let mut frontier = Frontier::<NodeId, f64>::new();
    let mut staged = Vec::<(NodeId, f64)>::new();

    for (id, node) in graph.nodes() {
        let estimate = heuristic.estimate(node.position(), goal_pos);
        if estimate.is_finite() {
            state.set_estimate(id, estimate);
        } else {
            warn!("A* ignoring non-finite estimate {} for {}", estimate, id);
            state.set_estimate(id, f64::ZERO);
        }
    }

    state.set_cost(start, Cost::ZERO, None);
    state.mark(start);
    frontier.push(start, f64::ZERO + state.estimate(start));

    while let Some((top, top_f)) = frontier.pop_unless(&goal) {
        state.settle(top);
        let (node, top_cost) = match (graph.node(top), state.cost(top)) {
            (Some(node), Some(cost)) => (node, cost),
            _ => continue,
        };
        debug!("A* settled {} at cost {} (f = {})", top, top_cost, top_f);
        visitor.visit(top, node);

        for arc in node.arcs() {
            let child = arc.target();
            // Both f values share the same h, so comparing g is enough
            let candidate = top_cost.saturating_add(arc.weight());
            let f = candidate as f64 + state.estimate(child);

            if state.is_settled(child) {
                if state.cost(child).map_or(false, |cost| candidate < cost) {
                    debug!("A* reopened {} via {} at cost {} (f = {})", child, top, candidate, f);
                    state.reopen(child);
                    state.set_cost(child, candidate, Some(top));
                    staged.push((child, f));
                }
                continue;
            }

            if state.cost(child).map_or(true, |cost| candidate < cost) {
                debug!("A* relaxed {} via {} to cost {} (f = {})", child, top, candidate, f);
                state.set_cost(child, candidate, Some(top));
                frontier.decrease_cost(&child, f);
            }

            if !state.is_marked(child) {
                state.mark(child);
                staged.push((child, f));
            }
        }

        // Newly discovered and reopened nodes join the frontier once all arcs of `top` are scanned
        for (child, f) in staged.drain(..) {
            frontier.push(child, f);
        }
    }

    let outcome = SearchOutcome::reconstruct(state, start, goal)?;
    info!("A* {} -> {}: {} hops, cost {}", start, goal, outcome.path().hops(), outcome.path().cost());
    Ok(outcome)
}
