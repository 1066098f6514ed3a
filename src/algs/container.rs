//! Uniform access to the vertex indices of edge soups, paths and triangle
//! soups.
//!
//! The generic algorithms (`minmax_indices`, `remap_indices`,
//! `to_vertex_set`, ...) only need to read or rewrite every index a
//! container references; [`IndexContainer`] provides exactly that.

use std::collections::BTreeSet;

use crate::graphs::{Edge, Index, Path, Triangle};

/// A container that references vertices by index.
pub trait IndexContainer {
    type Index: Index;

    /// Every referenced index, in storage order, repeats included.
    fn indices(&self) -> impl Iterator<Item = Self::Index> + '_;

    /// Mutable view of every referenced index, in storage order.
    fn indices_mut(&mut self) -> impl Iterator<Item = &mut Self::Index> + '_;
}

/// Vertex and edge counts.
pub trait GraphSize {
    /// Number of distinct vertices referenced.
    fn nb_vertices(&self) -> usize;
    /// Number of edges. For triangle soups, shared edges count once.
    fn nb_edges(&self) -> usize;
}

impl<I: Index> IndexContainer for [Edge<I>] {
    type Index = I;

    fn indices(&self) -> impl Iterator<Item = I> + '_ {
        self.iter().flat_map(|e| [e.orig(), e.dest()])
    }

    fn indices_mut(&mut self) -> impl Iterator<Item = &mut I> + '_ {
        self.iter_mut().flat_map(|e| e.endpoints_mut())
    }
}

impl<I: Index> IndexContainer for Path<I> {
    type Index = I;

    fn indices(&self) -> impl Iterator<Item = I> + '_ {
        self.vertices.iter().copied()
    }

    fn indices_mut(&mut self) -> impl Iterator<Item = &mut I> + '_ {
        self.vertices.iter_mut()
    }
}

impl<I: Index> IndexContainer for [Triangle<I>] {
    type Index = I;

    fn indices(&self) -> impl Iterator<Item = I> + '_ {
        self.iter().flat_map(|t| t.vertices)
    }

    fn indices_mut(&mut self) -> impl Iterator<Item = &mut I> + '_ {
        self.iter_mut().flat_map(|t| t.vertices.iter_mut())
    }
}

impl<I: Index> GraphSize for [Edge<I>] {
    fn nb_vertices(&self) -> usize {
        to_vertex_set(self).len()
    }

    fn nb_edges(&self) -> usize {
        self.len()
    }
}

impl<I: Index> GraphSize for Path<I> {
    fn nb_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn nb_edges(&self) -> usize {
        match (self.closed, self.vertices.len()) {
            (_, 0 | 1) => 0,
            (true, n) => n,
            (false, n) => n - 1,
        }
    }
}

impl<I: Index> GraphSize for [Triangle<I>] {
    fn nb_vertices(&self) -> usize {
        to_vertex_set(self).len()
    }

    fn nb_edges(&self) -> usize {
        self.iter()
            .flat_map(|t| t.edges())
            .map(|e| e.ordered())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Smallest and largest referenced index, `None` for an empty container.
pub fn minmax_indices<C>(container: &C) -> Option<(C::Index, C::Index)>
where
    C: IndexContainer + ?Sized,
{
    container.indices().fold(None, |acc, i| match acc {
        None => Some((i, i)),
        Some((lo, hi)) => Some((lo.min(i), hi.max(i))),
    })
}

/// Distinct referenced indices, sorted.
pub fn to_vertex_set<C>(container: &C) -> BTreeSet<C::Index>
where
    C: IndexContainer + ?Sized,
{
    container.indices().collect()
}
