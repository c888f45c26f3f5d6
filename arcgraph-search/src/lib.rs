//! Traversals and shortest path searches over an [`arcgraph_core::Graph`].
//!
//! Depth-first and breadth-first walks use the persistent node marks stored in the graph
//! and therefore need `&mut Graph`. Goal-directed searches (breadth-first with path,
//! uniform-cost and A*) keep all their state in a fresh [`SearchState`] and only borrow
//! the graph immutably.

pub use self::astar::{a_star, a_star_with};
pub use self::bfs_path::breadth_first_with_path;
pub use self::context::{Phase, SearchState};
pub use self::errors::{Result, SearchError};
pub use self::heuristic::{Euclidean, Heuristic, Zero};
pub use self::path::{Path, SearchOutcome};
pub use self::solver::GraphSearch;
pub use self::traverse::{breadth_first, depth_first};
pub use self::ucs::uniform_cost_search;
pub use self::visitor::{VisitLog, Visitor};

mod astar;
mod bfs_path;
mod context;
mod errors;
mod frontier;
mod heuristic;
mod numtraits;
mod path;
mod solver;
mod traverse;
mod ucs;
mod visitor;

#[cfg(test)]
mod test_graphs;

#[test]
fn test_ucs_and_astar_agree_on_abcd() {
    use arcgraph_core::NodeId;

    let g = test_graphs::abcd();
    let ucs = g.uniform_cost_search(NodeId(0), NodeId(2), &mut VisitLog::new()).unwrap();
    let astar = g.a_star(NodeId(0), NodeId(2), &mut VisitLog::new()).unwrap();
    assert_eq!(ucs.path(), astar.path());
    assert_eq!(astar.path().forward(), vec![NodeId(0), NodeId(1), NodeId(2)]);
    assert_eq!(astar.path().cost(), 2);
}

#[test]
fn test_clear_marks_then_rerun() {
    use arcgraph_core::NodeId;

    let mut g = test_graphs::abcd();
    let mut first = VisitLog::new();
    g.depth_first(NodeId(0), &mut first).unwrap();
    let path_before = g.a_star(NodeId(0), NodeId(2), &mut VisitLog::new()).unwrap().into_path();

    g.clear_marks();
    let mut second = VisitLog::new();
    g.depth_first(NodeId(0), &mut second).unwrap();
    let path_after = g.a_star(NodeId(0), NodeId(2), &mut VisitLog::new()).unwrap().into_path();

    assert_eq!(first, second);
    assert_eq!(path_before, path_after);
}
