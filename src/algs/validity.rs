//! Validity predicates and their error-reporting counterparts.
//!
//! The boolean [`Validity`] / [`HasDuplicates`] predicates are the cheap
//! checks used in debug assertions and by callers. The `validate_*`
//! functions perform the same checks but return the first [`GraphError`]
//! found; they back [`DebugInvariants`] and the `try_*` entry points.

use std::collections::BTreeSet;

use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::graphs::{Edge, Index, Path, Triangle};

/// Structural validity of a graph value.
pub trait Validity {
    fn is_valid(&self) -> bool;
}

/// Repeated elements: undirected edges for soups, vertices for paths.
pub trait HasDuplicates {
    fn has_duplicates(&self) -> bool;
}

impl<I: Index> Validity for Edge<I> {
    /// Both endpoints defined and not a loop.
    #[inline]
    fn is_valid(&self) -> bool {
        self.is_defined() && !self.is_loop()
    }
}

impl<I: Index> Validity for [Edge<I>] {
    fn is_valid(&self) -> bool {
        validate_edge_soup(self).is_ok()
    }
}

impl<I: Index> Validity for Path<I> {
    fn is_valid(&self) -> bool {
        validate_path(self).is_ok()
    }
}

impl<I: Index> Validity for Triangle<I> {
    fn is_valid(&self) -> bool {
        let [a, b, c] = self.vertices;
        a.is_defined() && b.is_defined() && c.is_defined() && a != b && b != c && c != a
    }
}

impl<I: Index> Validity for [Triangle<I>] {
    /// Per-triangle check only; manifoldness is not validated here.
    fn is_valid(&self) -> bool {
        self.iter().all(Validity::is_valid)
    }
}

impl<I: Index> HasDuplicates for [Edge<I>] {
    fn has_duplicates(&self) -> bool {
        let mut seen = BTreeSet::new();
        !self.iter().all(|e| seen.insert(e.ordered()))
    }
}

impl<I: Index> HasDuplicates for Path<I> {
    fn has_duplicates(&self) -> bool {
        let mut seen = BTreeSet::new();
        !self.vertices.iter().all(|v| seen.insert(*v))
    }
}

/// Every edge defined and loop-free, no undirected edge repeated.
pub fn validate_edge_soup<I: Index>(soup: &[Edge<I>]) -> Result<(), GraphError> {
    let mut seen = BTreeSet::new();
    for (position, e) in soup.iter().enumerate() {
        if !e.is_defined() {
            return Err(GraphError::UndefinedIndex { position });
        }
        if e.is_loop() {
            return Err(GraphError::LoopEdge {
                position,
                vertex: e.orig().to_raw(),
            });
        }
        let key = e.ordered();
        if !seen.insert(key) {
            return Err(GraphError::DuplicateEdge {
                orig: key.orig().to_raw(),
                dest: key.dest().to_raw(),
            });
        }
    }
    Ok(())
}

/// No repeated or undefined vertex; closed paths have at least 3 vertices.
pub fn validate_path<I: Index>(path: &Path<I>) -> Result<(), GraphError> {
    let mut seen = BTreeSet::new();
    for (position, &v) in path.vertices.iter().enumerate() {
        if !v.is_defined() {
            return Err(GraphError::UndefinedIndex { position });
        }
        if !seen.insert(v) {
            return Err(GraphError::DuplicatePathVertex { vertex: v.to_raw() });
        }
    }
    if path.closed && path.vertices.len() < 3 {
        return Err(GraphError::ClosedPathTooShort {
            len: path.vertices.len(),
        });
    }
    Ok(())
}

/// Every triangle has three distinct, defined corners.
pub fn validate_triangle_soup<I: Index>(triangles: &[Triangle<I>]) -> Result<(), GraphError> {
    match triangles.iter().position(|t| !t.is_valid()) {
        Some(position) => Err(GraphError::DegenerateTriangle { position }),
        None => Ok(()),
    }
}

impl<I: Index> DebugInvariants for [Edge<I>] {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(validate_edge_soup(self), "edge soup");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        validate_edge_soup(self)
    }
}

impl<I: Index> DebugInvariants for Path<I> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(validate_path(self), "path");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        validate_path(self)
    }
}

impl<I: Index> DebugInvariants for [Triangle<I>] {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(validate_triangle_soup(self), "triangle soup");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        validate_triangle_soup(self)
    }
}
