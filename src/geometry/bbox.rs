//! Axis-aligned bounding boxes.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;

/// Axis-aligned box `[min, max]`. An empty box has `min > max`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<F = f64> {
    pub min: Point<F>,
    pub max: Point<F>,
}

impl<F: Float> BoundingBox<F> {
    /// The box containing nothing; extending it by a point yields that point.
    pub fn empty() -> Self {
        BoundingBox {
            min: Point::new(F::infinity(), F::infinity()),
            max: Point::new(F::neg_infinity(), F::neg_infinity()),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point<F>>) -> Self
    where
        F: 'a,
    {
        let mut b = Self::empty();
        for p in points {
            b.extend(p);
        }
        b
    }

    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    pub fn extend(&mut self, p: &Point<F>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Self) -> Self {
        let mut b = *self;
        if !other.is_empty() {
            b.extend(&other.min);
            b.extend(&other.max);
        }
        b
    }

    pub fn width(&self) -> F {
        if self.is_empty() {
            F::zero()
        } else {
            self.max.x - self.min.x
        }
    }

    pub fn height(&self) -> F {
        if self.is_empty() {
            F::zero()
        } else {
            self.max.y - self.min.y
        }
    }

    pub fn center(&self) -> Point<F> {
        let two = F::one() + F::one();
        Point::new(
            (self.min.x + self.max.x) / two,
            (self.min.y + self.max.y) / two,
        )
    }

    /// Closed containment test.
    pub fn contains(&self, p: &Point<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl<F: Float> Default for BoundingBox<F> {
    fn default() -> Self {
        Self::empty()
    }
}
