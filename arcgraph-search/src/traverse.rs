//! Depth-first and breadth-first traversals over the persistent node marks.
//!
//! Marks are left set after a traversal, so a second walk from the same start visits
//! nothing new until `Graph::clear_marks()` is called.

use std::collections::VecDeque;

use arcgraph_core::{Arc, Graph, NodeId};
use log::debug;

use crate::errors::{search_node, Result};
use crate::visitor::Visitor;

/// Pre-order depth-first walk from `start`, following arcs in insertion order.
///
/// The start node is always visited. Every other node is visited at most once,
/// when it is first reached through an arc and is not marked yet.
pub fn depth_first<P, V: Visitor<P>>(graph: &mut Graph<P>, start: NodeId, visitor: &mut V) -> Result<()> {
    search_node(graph, start)?;

    let mut count = 1;
    visit_and_mark(graph, start, visitor);

    // Explicit stack of (node, index of the next arc to follow)
    let mut stack = vec![(start, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (id, next_arc) = *frame;
        let target = graph.node(id).and_then(|node| node.arcs().get(next_arc)).map(Arc::target);
        match target {
            Some(target) => {
                frame.1 += 1;
                if !is_marked(graph, target) {
                    visit_and_mark(graph, target, visitor);
                    count += 1;
                    stack.push((target, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!("Depth-first walk from {} visited {} nodes", start, count);
    Ok(())
}

/// Breadth-first walk from `start`.
///
/// Nodes are marked when they are enqueued and visited when they are dequeued.
pub fn breadth_first<P, V: Visitor<P>>(graph: &mut Graph<P>, start: NodeId, visitor: &mut V) -> Result<()> {
    search_node(graph, start)?;

    let mut count = 0;
    let mut queue = VecDeque::new();
    set_marked(graph, start);
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        let targets = match graph.node(id) {
            Some(node) => {
                visitor.visit(id, node);
                node.arcs().iter().map(Arc::target).collect::<Vec<_>>()
            }
            None => continue,
        };
        count += 1;

        for target in targets {
            if !is_marked(graph, target) {
                set_marked(graph, target);
                queue.push_back(target);
            }
        }
    }

    debug!("Breadth-first walk from {} visited {} nodes", start, count);
    Ok(())
}

fn is_marked<P>(graph: &Graph<P>, id: NodeId) -> bool {
    // Arc targets are always occupied, a missing node is simply never entered
    graph.node(id).map_or(true, |node| node.is_marked())
}

fn set_marked<P>(graph: &mut Graph<P>, id: NodeId) {
    if let Some(node) = graph.node_mut(id) {
        node.set_marked(true);
    }
}

fn visit_and_mark<P, V: Visitor<P>>(graph: &mut Graph<P>, id: NodeId, visitor: &mut V) {
    if let Some(node) = graph.node(id) {
        visitor.visit(id, node);
    }
    set_marked(graph, id);
}

#[cfg(test)]
mod tests {
    use arcgraph_core::{Graph, NodeId, Position};

    use crate::errors::SearchError;
    use crate::test_graphs::{abcd, ids};
    use crate::visitor::VisitLog;

    use super::*;

    #[test]
    fn test_depth_first_pre_order() {
        let mut g = abcd();
        let mut log = VisitLog::new();
        depth_first(&mut g, NodeId(0), &mut log).unwrap();
        // A, then B's subtree (B, C), then D
        assert_eq!(log.visited(), ids(&[0, 1, 2, 3]).as_slice());
        assert!(g.nodes().all(|(_, node)| node.is_marked()));
    }

    #[test]
    fn test_breadth_first_order() {
        let mut g = abcd();
        let mut log = VisitLog::new();
        breadth_first(&mut g, NodeId(0), &mut log).unwrap();
        assert_eq!(log.visited(), ids(&[0, 1, 3, 2]).as_slice());
    }

    #[test]
    fn test_marks_persist_until_cleared() {
        let mut g = abcd();
        let mut log = VisitLog::new();
        depth_first(&mut g, NodeId(1), &mut log).unwrap();
        assert_eq!(log.visited(), ids(&[1, 2]).as_slice());

        // A is unmarked, but B and C are already marked
        let mut log = VisitLog::new();
        depth_first(&mut g, NodeId(0), &mut log).unwrap();
        assert_eq!(log.visited(), ids(&[0, 3]).as_slice());

        let mut log = VisitLog::new();
        breadth_first(&mut g, NodeId(0), &mut log).unwrap();
        assert_eq!(log.visited(), ids(&[0]).as_slice());

        g.clear_marks();
        let mut log = VisitLog::new();
        breadth_first(&mut g, NodeId(0), &mut log).unwrap();
        assert_eq!(log.visited(), ids(&[0, 1, 3, 2]).as_slice());
    }

    #[test]
    fn test_closure_visitor() {
        let mut g = abcd();
        let mut names = Vec::new();
        let mut visitor = |_: NodeId, node: &arcgraph_core::Node<&'static str>| names.push(*node.payload());
        depth_first(&mut g, NodeId(0), &mut visitor).unwrap();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_invalid_start() {
        let mut g = abcd();
        let mut log = VisitLog::new();
        assert_eq!(depth_first(&mut g, NodeId(9), &mut log), Err(SearchError::InvalidNode(NodeId(9))));
        g.remove_node(NodeId(3)).unwrap();
        assert_eq!(breadth_first(&mut g, NodeId(3), &mut log), Err(SearchError::InvalidNode(NodeId(3))));
        assert!(log.visited().is_empty());
    }

    #[test]
    fn test_deep_chain() {
        // Deep enough to overflow a recursive walk
        let n = 200_000;
        let mut g = Graph::new(n);
        for i in 0..n {
            g.add_node(i, Position::new(i as f64, 0.0), i).unwrap();
        }
        for i in 1..n {
            g.add_arc(NodeId(i - 1), NodeId(i), 1).unwrap();
        }
        let mut count = 0;
        let mut visitor = |_: NodeId, _: &arcgraph_core::Node<usize>| count += 1;
        depth_first(&mut g, NodeId(0), &mut visitor).unwrap();
        assert_eq!(count, n);
    }
}
