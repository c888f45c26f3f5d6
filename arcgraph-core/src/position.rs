//! Node position on a plane.

use std::fmt;

/// 2D position of a node. Only used to estimate remaining distance during A* search.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Straight line distance between two positions.
    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[test]
fn test_distance_to() {
    let p = |x, y| Position::new(x, y);
    assert_eq!(p(0.0, 0.0).distance_to(&p(3.0, 4.0)), 5.0);
    assert_eq!(p(3.0, 4.0).distance_to(&p(0.0, 0.0)), 5.0);
    assert_eq!(p(-1.0, 2.0).distance_to(&p(-1.0, 2.0)), 0.0);
    assert_eq!(p(2.0, 0.0).distance_to(&p(2.0, 1.0)), 1.0);
}

#[test]
fn test_is_finite() {
    assert!(Position::new(-3.5, 1e300).is_finite());
    assert!(!Position::new(f64::NAN, 0.0).is_finite());
    assert!(!Position::new(0.0, f64::NEG_INFINITY).is_finite());
}
