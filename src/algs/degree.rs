//! Per-vertex degree statistics for edge soups.

use crate::graphs::{Edge, Index};

/// Degree table over the distinct vertices of an edge soup.
///
/// Vertices are compacted to dense slots `0..len()` in increasing index
/// order, so the table size follows the vertex count, never the index range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeTable<I> {
    vertices: Vec<I>,
    degrees: Vec<usize>,
}

impl<I: Index> DegreeTable<I> {
    /// Count incident edge endpoints per vertex. `None` for an empty soup.
    pub fn build(soup: &[Edge<I>]) -> Option<Self> {
        if soup.is_empty() {
            return None;
        }
        let mut vertices: Vec<I> = soup.iter().flat_map(|e| [e.orig(), e.dest()]).collect();
        vertices.sort_unstable();
        vertices.dedup();

        let mut table = DegreeTable {
            degrees: vec![0usize; vertices.len()],
            vertices,
        };
        for e in soup {
            for v in [e.orig(), e.dest()] {
                // every endpoint was collected above
                if let Some(slot) = table.slot(v) {
                    table.degrees[slot] += 1;
                }
            }
        }
        Some(table)
    }

    /// Number of distinct vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Dense slot of `v`, `None` if no edge references it.
    #[inline]
    pub fn slot(&self, v: I) -> Option<usize> {
        self.vertices.binary_search(&v).ok()
    }

    /// Vertex stored at `slot`.
    #[inline]
    pub fn vertex(&self, slot: usize) -> I {
        self.vertices[slot]
    }

    /// Degree of `v` (0 if unreferenced).
    pub fn degree(&self, v: I) -> usize {
        self.slot(v).map_or(0, |s| self.degrees[s])
    }

    #[inline]
    pub(crate) fn slot_degree(&self, slot: usize) -> usize {
        self.degrees[slot]
    }

    /// `(vertex, degree)` for every referenced vertex, by increasing index.
    pub fn iter(&self) -> impl Iterator<Item = (I, usize)> + '_ {
        self.vertices.iter().copied().zip(self.degrees.iter().copied())
    }

    pub fn min(&self) -> usize {
        self.degrees.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> usize {
        self.degrees.iter().copied().max().unwrap_or(0)
    }
}

/// Smallest degree of any referenced vertex.
pub fn min_degree<I: Index>(soup: &[Edge<I>]) -> Option<usize> {
    DegreeTable::build(soup).map(|t| t.min())
}

/// Largest degree of any referenced vertex.
pub fn max_degree<I: Index>(soup: &[Edge<I>]) -> Option<usize> {
    DegreeTable::build(soup).map(|t| t.max())
}

/// `(min_degree, max_degree)` computed from a single table.
pub fn minmax_degree<I: Index>(soup: &[Edge<I>]) -> Option<(usize, usize)> {
    DegreeTable::build(soup).map(|t| (t.min(), t.max()))
}
