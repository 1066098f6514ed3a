//! Triangle: three vertex indices with derived edges.

use serde::{Deserialize, Serialize};

use crate::graphs::edge::Edge;
use crate::graphs::index::Index;

/// Three vertex indices `(a, b, c)`; the winding is the listing order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle<I = u32> {
    pub vertices: [I; 3],
}

/// Flat, ordered sequence of triangles.
pub type TriangleSoup<I = u32> = Vec<Triangle<I>>;

impl<I: Index> Triangle<I> {
    #[inline]
    pub fn new(a: I, b: I, c: I) -> Self {
        Triangle {
            vertices: [a, b, c],
        }
    }

    #[inline]
    pub fn a(&self) -> I {
        self.vertices[0]
    }

    #[inline]
    pub fn b(&self) -> I {
        self.vertices[1]
    }

    #[inline]
    pub fn c(&self) -> I {
        self.vertices[2]
    }

    /// `(a, b)`, `(b, c)`, `(c, a)`.
    #[inline]
    pub fn edges(&self) -> [Edge<I>; 3] {
        let [a, b, c] = self.vertices;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Reverse the winding by swapping the second and third corners.
    #[inline]
    pub fn flip_orientation(&mut self) {
        self.vertices.swap(1, 2);
    }
}

impl<I: Index> From<[I; 3]> for Triangle<I> {
    fn from(vertices: [I; 3]) -> Self {
        Triangle { vertices }
    }
}

/// Free-function form of [`Triangle::flip_orientation`].
#[inline]
pub fn flip_orientation<I: Index>(triangle: &mut Triangle<I>) {
    triangle.flip_orientation();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_winding() {
        let t = Triangle::new(0u32, 1, 2);
        assert_eq!(t.edges(), [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)]);
    }

    #[test]
    fn flip_swaps_second_and_third() {
        let mut t = Triangle::new(0u32, 1, 2);
        flip_orientation(&mut t);
        assert_eq!(t.vertices, [0, 2, 1]);
        t.flip_orientation();
        assert_eq!(t, Triangle::new(0, 1, 2));
    }
}
