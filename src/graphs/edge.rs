//! Edge: ordered pair of vertex indices.
//!
//! An [`Edge`] keeps its direction (`orig -> dest`) so traversal code can
//! walk it, while its [`ordered`](Edge::ordered) form `(min, max)` is the
//! undirected representative used for deduplication and set membership.

use serde::{Deserialize, Serialize};

use crate::graphs::index::Index;

/// A directed connection `orig -> dest` between two vertex indices.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Edge<I = u32> {
    orig: I,
    dest: I,
}

/// Flat, ordered sequence of edges with no assumed connectivity.
pub type EdgeSoup<I = u32> = Vec<Edge<I>>;

impl<I: Index> Edge<I> {
    #[inline]
    pub fn new(orig: I, dest: I) -> Self {
        Edge { orig, dest }
    }

    /// An edge with both endpoints undefined.
    #[inline]
    pub fn undef() -> Self {
        Edge::new(I::undef(), I::undef())
    }

    #[inline]
    pub fn orig(&self) -> I {
        self.orig
    }

    #[inline]
    pub fn dest(&self) -> I {
        self.dest
    }

    #[inline]
    pub fn orig_mut(&mut self) -> &mut I {
        &mut self.orig
    }

    #[inline]
    pub fn dest_mut(&mut self) -> &mut I {
        &mut self.dest
    }

    /// Both endpoints as a tuple.
    #[inline]
    pub fn endpoints(&self) -> (I, I) {
        (self.orig, self.dest)
    }

    /// Mutable access to both endpoints at once.
    #[inline]
    pub fn endpoints_mut(&mut self) -> [&mut I; 2] {
        [&mut self.orig, &mut self.dest]
    }

    /// Both endpoints are defined.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.orig.is_defined() && self.dest.is_defined()
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.orig == self.dest
    }

    /// The same edge walked the other way.
    #[inline]
    pub fn reversed(&self) -> Self {
        Edge::new(self.dest, self.orig)
    }

    /// Canonical undirected form `(min(orig, dest), max(orig, dest))`.
    #[inline]
    pub fn ordered(&self) -> Self {
        if self.orig <= self.dest {
            *self
        } else {
            self.reversed()
        }
    }

    /// The endpoint opposite to `v`, if `v` is one of them.
    #[inline]
    pub fn opposite(&self, v: I) -> Option<I> {
        if v == self.orig {
            Some(self.dest)
        } else if v == self.dest {
            Some(self.orig)
        } else {
            None
        }
    }
}

impl<I: Index> From<(I, I)> for Edge<I> {
    fn from((orig, dest): (I, I)) -> Self {
        Edge::new(orig, dest)
    }
}

/// Canonical `(min, max)` form of `edge`.
#[inline]
pub fn ordered_edge<I: Index>(edge: Edge<I>) -> Edge<I> {
    edge.ordered()
}
