//! A* heuristics.

use arcgraph_core::Position;

/// Estimate of the remaining cost from a node to the goal.
///
/// The estimate must be finite. A* only returns shortest paths when the heuristic never
/// overestimates the real remaining cost.
pub trait Heuristic {
    fn estimate(&self, from: Position, goal: Position) -> f64;
}

/// Straight line distance between the two positions.
#[derive(Copy, Clone, Default, Debug)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Position, goal: Position) -> f64 {
        from.distance_to(&goal)
    }
}

/// Always zero. Makes A* expand nodes in uniform-cost order.
#[derive(Copy, Clone, Default, Debug)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Position, _goal: Position) -> f64 {
        0.0
    }
}

impl<F> Heuristic for F where F: Fn(Position, Position) -> f64 {
    fn estimate(&self, from: Position, goal: Position) -> f64 {
        self(from, goal)
    }
}

#[test]
fn test_heuristics() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert_eq!(Euclidean.estimate(a, b), 5.0);
    assert_eq!(Zero.estimate(a, b), 0.0);
    let manhattan = |p: Position, q: Position| (p.x - q.x).abs() + (p.y - q.y).abs();
    assert_eq!(manhattan.estimate(a, b), 7.0);
}
