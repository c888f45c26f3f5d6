//! Search entry points as methods on the graph.

use arcgraph_core::{Graph, NodeId};

use crate::errors::Result;
use crate::heuristic::Heuristic;
use crate::path::SearchOutcome;
use crate::visitor::Visitor;

/// Traversal and path finding functions.
pub trait GraphSearch<P> {
    /// Pre-order depth-first walk over the persistent node marks.
    fn depth_first<V: Visitor<P>>(&mut self, start: NodeId, visitor: &mut V) -> Result<()>;

    /// Breadth-first walk over the persistent node marks.
    fn breadth_first<V: Visitor<P>>(&mut self, start: NodeId, visitor: &mut V) -> Result<()>;

    /// Path with the fewest arcs from `start` to `goal`.
    fn breadth_first_with_path<V: Visitor<P>>(&self, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome>;

    /// Cheapest path from `start` to `goal`.
    fn uniform_cost_search<V: Visitor<P>>(&self, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome>;

    /// Cheapest path from `start` to `goal`, guided by the Euclidean distance.
    fn a_star<V: Visitor<P>>(&self, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome>;

    /// Cheapest path from `start` to `goal`, guided by `heuristic`.
    fn a_star_with<H: Heuristic + ?Sized, V: Visitor<P>>(&self, start: NodeId, goal: NodeId, heuristic: &H, visitor: &mut V) -> Result<SearchOutcome>;
}

impl<P> GraphSearch<P> for Graph<P> {
    fn depth_first<V: Visitor<P>>(&mut self, start: NodeId, visitor: &mut V) -> Result<()> {
        crate::traverse::depth_first(self, start, visitor)
    }

    fn breadth_first<V: Visitor<P>>(&mut self, start: NodeId, visitor: &mut V) -> Result<()> {
        crate::traverse::breadth_first(self, start, visitor)
    }

    fn breadth_first_with_path<V: Visitor<P>>(&self, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome> {
        crate::bfs_path::breadth_first_with_path(self, start, goal, visitor)
    }

    fn uniform_cost_search<V: Visitor<P>>(&self, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome> {
        crate::ucs::uniform_cost_search(self, start, goal, visitor)
    }

    fn a_star<V: Visitor<P>>(&self, start: NodeId, goal: NodeId, visitor: &mut V) -> Result<SearchOutcome> {
        crate::astar::a_star(self, start, goal, visitor)
    }

    fn a_star_with<H: Heuristic + ?Sized, V: Visitor<P>>(&self, start: NodeId, goal: NodeId, heuristic: &H, visitor: &mut V) -> Result<SearchOutcome> {
        crate::astar::a_star_with(self, start, goal, heuristic, visitor)
    }
}
