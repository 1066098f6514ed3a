//! Polylines: open or closed point sequences used as triangulation
//! constraints and holes.

use itertools::Itertools;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geometry::bbox::BoundingBox;
use crate::geometry::point::Point;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline<F = f64> {
    pub closed: bool,
    pub vertices: Vec<Point<F>>,
}

impl<F: Float> Polyline<F> {
    pub fn new_open(vertices: Vec<Point<F>>) -> Self {
        Polyline {
            closed: false,
            vertices,
        }
    }

    pub fn new_closed(vertices: Vec<Point<F>>) -> Self {
        Polyline {
            closed: true,
            vertices,
        }
    }

    /// Closed polylines need 3 vertices, open ones 2.
    pub fn is_valid(&self) -> bool {
        let needed = if self.closed { 3 } else { 2 };
        self.vertices.len() >= needed
    }

    /// Consecutive vertex pairs, closing segment last for closed polylines.
    pub fn segments(&self) -> impl Iterator<Item = (&Point<F>, &Point<F>)> + '_ {
        let closing = (self.closed && self.vertices.len() > 2)
            .then(|| (&self.vertices[self.vertices.len() - 1], &self.vertices[0]));
        self.vertices.iter().tuple_windows().chain(closing)
    }

    /// Index pairs of [`segments`](Self::segments).
    pub fn segment_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertices.len();
        let closing = (self.closed && n > 2).then(|| (n - 1, 0));
        (0..n).tuple_windows().chain(closing)
    }

    pub fn bounding_box(&self) -> BoundingBox<F> {
        BoundingBox::from_points(&self.vertices)
    }

    /// Even-odd point-in-polygon test. Always `false` for open polylines.
    pub fn contains(&self, p: &Point<F>) -> bool {
        if !self.closed || self.vertices.len() < 3 || !self.bounding_box().contains(p) {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.segments() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}
