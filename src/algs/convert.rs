//! Conversions between paths, triangle soups and edge soups.

use hashbrown::HashSet;

use crate::graphs::{Edge, Index, Path, Triangle};

/// Containers that can be flattened to an edge soup.
pub trait ToEdgeSoup {
    type Index: Index;

    fn to_edge_soup(&self) -> Vec<Edge<Self::Index>>;
}

impl<I: Index> ToEdgeSoup for Path<I> {
    type Index = I;

    /// The path's edges in walking order, closing edge last.
    fn to_edge_soup(&self) -> Vec<Edge<I>> {
        self.edges().collect()
    }
}

impl<I: Index> ToEdgeSoup for [Path<I>] {
    type Index = I;

    fn to_edge_soup(&self) -> Vec<Edge<I>> {
        self.iter().flat_map(|p| p.edges()).collect()
    }
}

impl<I: Index> ToEdgeSoup for [Triangle<I>] {
    type Index = I;

    /// Every undirected edge once, in order of first appearance, keeping the
    /// direction of the triangle that introduced it.
    fn to_edge_soup(&self) -> Vec<Edge<I>> {
        let mut seen = HashSet::with_capacity(self.len() * 2);
        self.iter()
            .flat_map(|t| t.edges())
            .filter(|e| seen.insert(e.ordered()))
            .collect()
    }
}

/// Free-function form of [`ToEdgeSoup::to_edge_soup`].
pub fn to_edge_soup<C>(container: &C) -> Vec<Edge<C::Index>>
where
    C: ToEdgeSoup + ?Sized,
{
    container.to_edge_soup()
}
