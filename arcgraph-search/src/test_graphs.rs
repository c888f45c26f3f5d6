//! Graphs and reference answers shared by the search tests.

use arcgraph_core::{Cost, Graph, NodeId, Position};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::path::Path;

pub fn ids(indices: &[usize]) -> Vec<NodeId> {
    indices.iter().map(|&i| NodeId(i)).collect()
}

/// `A(0,0) B(1,0) C(2,0) D(2,1)` with arcs `A->B(1) B->C(1) A->D(5) D->C(1)`.
pub fn abcd() -> Graph<&'static str> {
    let mut g = Graph::new(4);
    g.add_node("A", Position::new(0.0, 0.0), 0).unwrap();
    g.add_node("B", Position::new(1.0, 0.0), 1).unwrap();
    g.add_node("C", Position::new(2.0, 0.0), 2).unwrap();
    g.add_node("D", Position::new(2.0, 1.0), 3).unwrap();
    g.add_arc(NodeId(0), NodeId(1), 1).unwrap();
    g.add_arc(NodeId(1), NodeId(2), 1).unwrap();
    g.add_arc(NodeId(0), NodeId(3), 5).unwrap();
    g.add_arc(NodeId(3), NodeId(2), 1).unwrap();
    g
}

/// Random graph on integer grid positions.
/// Every arc weighs at least the straight line distance between its ends,
/// so the Euclidean heuristic is admissible on it.
pub fn random_graph(rng: &mut SmallRng, n: usize, arc_chance: f64) -> Graph<usize> {
    let mut g = Graph::new(n);
    for i in 0..n {
        let pos = Position::new(rng.gen_range(0, 10) as f64, rng.gen_range(0, 10) as f64);
        g.add_node(i, pos, i).unwrap();
    }
    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(arc_chance) {
                let a = g.node(NodeId(from)).unwrap().position();
                let b = g.node(NodeId(to)).unwrap().position();
                let weight = a.distance_to(&b).ceil() as i64 + rng.gen_range(0, 5);
                g.add_arc(NodeId(from), NodeId(to), weight).unwrap();
            }
        }
    }
    g
}

/// All-pairs shortest path costs (Floyd-Warshall).
pub fn brute_force_costs<P>(g: &Graph<P>) -> Vec<Vec<Option<Cost>>> {
    let n = g.capacity();
    let mut dist = vec![vec![None; n]; n];
    for (id, node) in g.nodes() {
        dist[id.index()][id.index()] = Some(0);
        for arc in node.arcs() {
            let d = &mut dist[id.index()][arc.target().index()];
            if d.map_or(true, |cur| arc.weight() < cur) {
                *d = Some(arc.weight());
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |cur| ik + kj < cur) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

/// Check the path is a walk over existing arcs whose weights sum up to its cost.
pub fn assert_valid_walk<P>(g: &Graph<P>, path: &Path, start: NodeId, goal: NodeId) {
    assert_eq!(path.start(), start);
    assert_eq!(path.goal(), goal);
    assert_eq!(path.reverse_nodes().first(), Some(&goal));
    assert_eq!(path.reverse_nodes().last(), Some(&start));
    let forward = path.forward();
    let cost = forward
        .windows(2)
        .map(|pair| g.arc(pair[0], pair[1]).expect("path uses a missing arc").weight())
        .sum::<Cost>();
    assert_eq!(cost, path.cost());
}
