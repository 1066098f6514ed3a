//! `Point`: 2D coordinates.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point<F = f64> {
    pub x: F,
    pub y: F,
}

/// Unstructured set of points.
pub type PointCloud<F = f64> = Vec<Point<F>>;

impl<F: Float> Point<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> F {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Centroid of three points.
    pub fn centroid(a: &Self, b: &Self, c: &Self) -> Self {
        let three = F::one() + F::one() + F::one();
        Point::new((a.x + b.x + c.x) / three, (a.y + b.y + c.y) / three)
    }
}

impl<F> From<[F; 2]> for Point<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Point { x, y }
    }
}

impl<F> From<(F, F)> for Point<F> {
    fn from((x, y): (F, F)) -> Self {
        Point { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn centroid_and_finiteness() {
        let c = Point::centroid(
            &Point::new(0.0f32, 0.0),
            &Point::new(3.0, 0.0),
            &Point::new(0.0, 3.0),
        );
        assert_eq!(c, Point::new(1.0, 1.0));
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert_eq!(Point::from([1.0, 2.0]), Point::new(1.0, 2.0));
    }
}
