//! Decompose an edge soup into open and closed paths.
//!
//! The soup need not be 1-manifold. Vertices of degree other than 2 are
//! path endpoints (or branch points), so several paths may meet at one
//! vertex. Each input edge ends up in exactly one output path.
//!
//! # Algorithm
//! 1. Build a [`DegreeTable`], compacting the referenced vertices to dense
//!    slots.
//! 2. Fill a [`HalfEdgeArena`]: one flat buffer of `vertex_count * max_degree`
//!    neighbour slots plus a visited flag per slot (each slot is a directed
//!    half-edge `v -> neighbour`).
//! 3. Walk from every vertex of degree != 2 first, then from the remaining
//!    degree-2 vertices (which only lie on isolated cycles by then). A walk
//!    takes the first unvisited half-edge, marks it and its twin, and stops
//!    when it returns to its start (closed path) or reaches a vertex whose
//!    degree is not 2 (open path).

use crate::algs::degree::DegreeTable;
use crate::algs::validation::{ValidationOptions, validate_edge_soup_with};
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::graphs::{Edge, Index, Path};

/// Flat half-edge adjacency: `max_degree` slots per vertex slot.
#[derive(Debug)]
struct HalfEdgeArena {
    stride: usize,
    neighbours: Vec<usize>,
    filled: Vec<usize>,
    visited: Vec<bool>,
}

impl HalfEdgeArena {
    fn new(vertex_count: usize, stride: usize) -> Self {
        HalfEdgeArena {
            stride,
            neighbours: vec![usize::MAX; vertex_count * stride],
            filled: vec![0; vertex_count],
            visited: vec![false; vertex_count * stride],
        }
    }

    fn push(&mut self, v: usize, w: usize) {
        let k = self.filled[v];
        self.neighbours[v * self.stride + k] = w;
        self.filled[v] = k + 1;
    }

    fn slots(&self, v: usize) -> std::ops::Range<usize> {
        let base = v * self.stride;
        base..base + self.filled[v]
    }

    fn has_unvisited(&self, v: usize) -> bool {
        self.slots(v).any(|s| !self.visited[s])
    }

    /// Take the first unvisited half-edge out of `v`, mark it and its twin,
    /// and return the neighbour it leads to.
    fn take(&mut self, v: usize) -> Option<usize> {
        let slot = self.slots(v).find(|&s| !self.visited[s])?;
        let w = self.neighbours[slot];
        self.visited[slot] = true;
        if let Some(twin) = self
            .slots(w)
            .find(|&s| !self.visited[s] && self.neighbours[s] == v)
        {
            self.visited[twin] = true;
        }
        Some(w)
    }
}

/// Split `soup` into paths. `soup` must be valid (no loops, no duplicate
/// undirected edges); that precondition is asserted in debug builds.
pub fn extract_paths<I: Index>(soup: &[Edge<I>]) -> Vec<Path<I>> {
    soup.debug_assert_invariants();

    let Some(degrees) = DegreeTable::build(soup) else {
        return Vec::new();
    };
    let vertex_count = degrees.len();

    let mut arena = HalfEdgeArena::new(vertex_count, degrees.max());
    for e in soup {
        // every endpoint has a slot in the table built from this soup
        let (Some(a), Some(b)) = (degrees.slot(e.orig()), degrees.slot(e.dest())) else {
            continue;
        };
        arena.push(a, b);
        arena.push(b, a);
    }

    // branch points and endpoints first, then cycle candidates
    let (mut order, cycles): (Vec<usize>, Vec<usize>) =
        (0..vertex_count).partition(|&s| degrees.slot_degree(s) != 2);
    order.extend(cycles);

    let mut paths = Vec::new();
    for start in order {
        while arena.has_unvisited(start) {
            let mut vertices = vec![start];
            let mut closed = false;
            let mut cur = start;
            while let Some(next) = arena.take(cur) {
                if next == start {
                    closed = true;
                    break;
                }
                vertices.push(next);
                if degrees.slot_degree(next) != 2 {
                    break;
                }
                cur = next;
            }
            paths.push(Path {
                closed,
                vertices: vertices
                    .into_iter()
                    .map(|s| degrees.vertex(s))
                    .collect(),
            });
        }
    }

    log::trace!(
        "extract_paths: {} edges -> {} paths",
        soup.len(),
        paths.len()
    );
    paths
}

/// [`extract_paths`] preceded by an explicit validation pass.
pub fn try_extract_paths<I: Index>(
    soup: &[Edge<I>],
    options: &ValidationOptions,
) -> Result<Vec<Path<I>>, GraphError> {
    validate_edge_soup_with(soup, options)?;
    Ok(extract_paths(soup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::container::GraphSize;

    fn soup(pairs: &[(u32, u32)]) -> Vec<Edge<u32>> {
        pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect()
    }

    fn total_edges(paths: &[Path<u32>]) -> usize {
        paths.iter().map(|p| p.nb_edges()).sum()
    }

    #[test]
    fn open_chain() {
        let paths = extract_paths(&soup(&[(1, 2), (2, 4)]));
        assert_eq!(paths.len(), 1);
        assert!(!paths[0].closed);
        let mut v = paths[0].vertices.clone();
        if v[0] == 4 {
            v.reverse();
        }
        assert_eq!(v, vec![1, 2, 4]);
    }

    #[test]
    fn closed_triangle() {
        let paths = extract_paths(&soup(&[(2, 3), (3, 6), (6, 2)]));
        assert_eq!(paths.len(), 1);
        assert!(paths[0].closed);
        assert_eq!(paths[0].vertices.len(), 3);
    }

    #[test]
    fn letter_a_has_four_open_paths() {
        let s = soup(&[(0, 1), (0, 3), (1, 2), (2, 3), (1, 4), (3, 5)]);
        let paths = extract_paths(&s);
        assert_eq!(paths.len(), 4);
        assert!(paths.iter().all(|p| !p.closed));
        assert_eq!(total_edges(&paths), s.len());
    }

    #[test]
    fn cycle_through_branch_vertex_is_closed() {
        // 0 has degree 4: a triangle 0-1-2 plus a tail 0-3 and 0-4
        let s = soup(&[(0, 1), (1, 2), (2, 0), (0, 3), (0, 4)]);
        let paths = extract_paths(&s);
        assert_eq!(total_edges(&paths), 5);
        assert_eq!(paths.iter().filter(|p| p.closed).count(), 1);
        assert_eq!(paths.iter().filter(|p| !p.closed).count(), 2);
    }

    #[test]
    fn isolated_cycles_after_branches() {
        let s = soup(&[(10, 11), (11, 12), (12, 13), (13, 10), (20, 21), (21, 22)]);
        let paths = extract_paths(&s);
        assert_eq!(paths.len(), 2);
        assert!(!paths[0].closed);
        assert!(paths[1].closed);
        assert_eq!(paths[1].vertices.len(), 4);
    }

    #[test]
    fn try_extract_rejects_duplicates() {
        let s = soup(&[(0, 1), (1, 0)]);
        assert_eq!(
            try_extract_paths(&s, &ValidationOptions::all()),
            Err(GraphError::DuplicateEdge { orig: 0, dest: 1 })
        );
    }

    #[test]
    fn far_apart_indices_use_vertex_slots() {
        let s = soup(&[(0, 1 << 30), (1 << 30, 7)]);
        let paths = extract_paths(&s);
        assert_eq!(paths.len(), 1);
        assert!(!paths[0].closed);
        let mut v = paths[0].vertices.clone();
        if v[0] == 7 {
            v.reverse();
        }
        assert_eq!(v, vec![0, 1 << 30, 7]);
    }

    #[test]
    fn empty_soup_has_no_paths() {
        assert!(extract_paths::<u32>(&[]).is_empty());
    }
}
