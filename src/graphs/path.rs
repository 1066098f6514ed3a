//! Path: ordered vertex sequence, open or closed.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::edge::Edge;
use crate::graphs::index::Index;

/// A simple path through a graph.
///
/// A valid path never repeats a vertex; a closed path has at least three
/// vertices and implicitly connects its last vertex back to the first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path<I = u32> {
    pub closed: bool,
    pub vertices: Vec<I>,
}

impl<I: Index> Path<I> {
    pub fn new_open(vertices: Vec<I>) -> Self {
        Path {
            closed: false,
            vertices,
        }
    }

    pub fn new_closed(vertices: Vec<I>) -> Self {
        Path {
            closed: true,
            vertices,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges walked by the path, in order. A closed path yields the closing
    /// edge last.
    pub fn edges(&self) -> impl Iterator<Item = Edge<I>> + '_ {
        let closing = (self.closed && self.vertices.len() > 1).then(|| {
            // both ends exist when len > 1
            Edge::new(self.vertices[self.vertices.len() - 1], self.vertices[0])
        });
        self.vertices
            .iter()
            .tuple_windows()
            .map(|(&a, &b)| Edge::new(a, b))
            .chain(closing)
    }

    /// Reverse the walking direction in place.
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }
}
