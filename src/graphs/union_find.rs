//! Disjoint-set forest over `[0, n)` with union by subset size.
//!
//! [`UnionFind`] backs Kruskal's minimum spanning tree. Roots are found by
//! plain parent chasing; path compression is not implemented, so `find` is
//! `O(log n)` worst case (union by size bounds the tree height).

use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::graphs::index::Index;

/// Parent-pointer forest. `size` is only meaningful at roots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnionFind<I = u32> {
    parent: Vec<I>,
    size: Vec<I>,
}

impl<I: Index> UnionFind<I> {
    /// `n` singleton subsets, each its own root with size 1.
    ///
    /// # Panics
    /// Panics if `n - 1` is not a valid index of `I`.
    pub fn new(n: usize) -> Self {
        if n > 0 {
            assert!(
                I::try_from_usize(n - 1).is_some(),
                "UnionFind of {n} elements overflows the index type"
            );
        }
        let parent = (0..n)
            .map(|i| I::try_from_usize(i).unwrap_or_else(I::undef))
            .collect();
        UnionFind {
            parent,
            size: vec![I::one(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the subset containing `i`, or an error if the parent chain is
    /// longer than the forest (a cycle).
    pub fn try_find(&self, i: I) -> Result<I, GraphError> {
        let n = self.parent.len();
        let mut cur = i;
        for _ in 0..=n {
            let parent = self.parent[cur.as_usize()];
            if parent == cur {
                return Ok(cur);
            }
            cur = parent;
        }
        Err(GraphError::CyclicParentChain {
            start: i.to_raw(),
            steps: n,
        })
    }

    /// Root of the subset containing `i`.
    ///
    /// # Panics
    /// Panics on a cyclic parent chain. That cannot happen when the forest
    /// is only mutated through [`subset_union`](Self::subset_union).
    pub fn find(&self, i: I) -> I {
        match self.try_find(i) {
            Ok(root) => root,
            Err(e) => panic!("[union-find] {e}"),
        }
    }

    /// Merge the subsets of `i` and `j`; the smaller root goes under the
    /// larger. Returns `false` if they were already joined.
    pub fn subset_union(&mut self, i: I, j: I) -> bool {
        let ri = self.find(i);
        let rj = self.find(j);
        if ri == rj {
            return false;
        }
        let (si, sj) = (self.size[ri.as_usize()], self.size[rj.as_usize()]);
        let (big, small) = if si < sj { (rj, ri) } else { (ri, rj) };
        self.parent[small.as_usize()] = big;
        self.size[big.as_usize()] = si + sj;
        true
    }

    /// Size of the subset containing `i`.
    pub fn subset_size(&self, i: I) -> I {
        self.size[self.find(i).as_usize()]
    }

    /// `true` if `i` and `j` share a root.
    pub fn connected(&self, i: I, j: I) -> bool {
        self.find(i) == self.find(j)
    }
}

impl<I: Index> DebugInvariants for UnionFind<I> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "UnionFind");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        for i in 0..self.parent.len() {
            if let Some(idx) = I::try_from_usize(i) {
                self.try_find(idx)?;
            }
        }
        Ok(())
    }
}
