//! Proximity-graph selection over weighted edges.
//!
//! Each selector reorders a mutable slice of [`WeightedEdge`] values in place
//! and returns `mid`, the number of selected edges: `edges[..mid]` is the
//! proximity graph, `edges[mid..]` the rejected remainder. Selection is
//! swap-based, so the order inside either part is not preserved relative to
//! the input. Callers truncate to `mid`.
//!
//! Weights are assumed Euclidean-like (non-negative, symmetric). Nothing
//! checks that; other weights give a structurally valid but meaningless
//! graph.

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use crate::algs::container::minmax_indices;
use crate::graphs::{Edge, Index, UnionFind};

/// An edge carrying a comparable weight.
pub trait WeightedEdge {
    type Index: Index;
    type Weight: Copy + PartialOrd;

    fn edge(&self) -> Edge<Self::Index>;
    fn weight(&self) -> Self::Weight;
}

/// Plain `(edge, weight)` storage.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Weighted<I = u32, F = f64> {
    pub edge: Edge<I>,
    pub weight: F,
}

impl<I: Index, F: Copy + PartialOrd> Weighted<I, F> {
    pub fn new(edge: Edge<I>, weight: F) -> Self {
        Weighted { edge, weight }
    }
}

impl<I: Index, F: Copy + PartialOrd> WeightedEdge for Weighted<I, F> {
    type Index = I;
    type Weight = F;

    fn edge(&self) -> Edge<I> {
        self.edge
    }

    fn weight(&self) -> F {
        self.weight
    }
}

impl<I: Index, F: Copy + PartialOrd> WeightedEdge for (Edge<I>, F) {
    type Index = I;
    type Weight = F;

    fn edge(&self) -> Edge<I> {
        self.0
    }

    fn weight(&self) -> F {
        self.1
    }
}

/// Stable ascending sort by weight; incomparable weights (NaN) compare equal.
fn sort_by_weight<E: WeightedEdge>(edges: &mut [E]) {
    edges.sort_by(|a, b| {
        a.weight()
            .partial_cmp(&b.weight())
            .unwrap_or(Ordering::Equal)
    });
}

/// Endpoint indices referenced by `edges`, without the edge view.
fn index_window<E: WeightedEdge>(edges: &[E]) -> Option<(E::Index, E::Index)> {
    let soup: Vec<Edge<E::Index>> = edges.iter().map(WeightedEdge::edge).collect();
    minmax_indices(soup.as_slice())
}

/// Distinct endpoint indices, sorted.
fn witnesses<E: WeightedEdge>(edges: &[E]) -> Vec<E::Index> {
    let mut v: Vec<E::Index> = edges
        .iter()
        .flat_map(|e| {
            let edge = e.edge();
            [edge.orig(), edge.dest()]
        })
        .collect();
    v.sort_unstable();
    v.dedup();
    v
}

/// Move `edges[k]` into the selected prefix.
#[inline]
fn select<E>(edges: &mut [E], mid: &mut usize, k: usize) {
    edges.swap(*mid, k);
    *mid += 1;
}

/// Nearest-neighbour graph.
///
/// Edges are scanned by ascending weight; an edge is selected iff one of its
/// endpoints has not been connected yet. The scan stops once the number of
/// connected vertices reaches `max_index + 1`, the size of the connection
/// table. With sparse indices that bound is never reached and the scan runs
/// to the end, which does not change the selection.
pub fn nearest_neighbor<E: WeightedEdge>(edges: &mut [E]) -> usize {
    let Some((_, hi)) = index_window(edges) else {
        return 0;
    };
    sort_by_weight(edges);

    let mut connected = vec![false; hi.as_usize() + 1];
    let mut point_count = 0usize;
    let mut mid = 0usize;
    for k in 0..edges.len() {
        if point_count == connected.len() {
            break;
        }
        let e = edges[k].edge();
        let mut selected = false;
        for v in [e.orig(), e.dest()] {
            let slot = &mut connected[v.as_usize()];
            if !*slot {
                *slot = true;
                point_count += 1;
                selected = true;
            }
        }
        if selected {
            select(edges, &mut mid, k);
        }
    }
    mid
}

/// Minimum spanning tree (forest, if disconnected) by Kruskal's algorithm.
///
/// Equal weights keep their input order (stable sort), so ties resolve
/// deterministically.
pub fn minimum_spanning_tree<E: WeightedEdge>(edges: &mut [E]) -> usize {
    let Some((_, hi)) = index_window(edges) else {
        return 0;
    };
    sort_by_weight(edges);

    let mut forest = UnionFind::<E::Index>::new(hi.as_usize() + 1);
    let mut mid = 0usize;
    for k in 0..edges.len() {
        let e = edges[k].edge();
        if forest.subset_union(e.orig(), e.dest()) {
            select(edges, &mut mid, k);
        }
    }
    mid
}

/// Relative neighbourhood graph.
///
/// Edge `(i, j)` of weight `w` is kept iff no other vertex `k` has both
/// `weight(i, k) < w` and `weight(j, k) < w` (empty lune). Candidate `k`
/// are the vertices referenced by `edges`. `O(edges * vertices)`.
pub fn relative_neighborhood_graph<E, W>(edges: &mut [E], weight: W) -> usize
where
    E: WeightedEdge,
    W: Fn(E::Index, E::Index) -> E::Weight,
{
    let candidates = witnesses(edges);
    let mut mid = 0usize;
    for k in 0..edges.len() {
        let (i, j) = edges[k].edge().endpoints();
        let w = edges[k].weight();
        let blocked = candidates
            .iter()
            .filter(|&&v| v != i && v != j)
            .any(|&v| weight(i, v) < w && weight(j, v) < w);
        if !blocked {
            select(edges, &mut mid, k);
        }
    }
    mid
}

/// Keep `edges[k]` iff no witness `v` has `lhs(i, j, v) < threshold(w)`.
fn empty_circle_partition<E, T, L>(edges: &mut [E], threshold: T, lhs: L) -> usize
where
    E: WeightedEdge,
    T: Fn(E::Weight) -> E::Weight,
    L: Fn(E::Index, E::Index, E::Index) -> E::Weight,
{
    let candidates = witnesses(edges);
    let mut mid = 0usize;
    for k in 0..edges.len() {
        let (i, j) = edges[k].edge().endpoints();
        let bound = threshold(edges[k].weight());
        let blocked = candidates
            .iter()
            .filter(|&&v| v != i && v != j)
            .any(|&v| lhs(i, j, v) < bound);
        if !blocked {
            select(edges, &mut mid, k);
        }
    }
    mid
}

/// Gabriel graph.
///
/// Edge `(i, j)` of weight `w` is kept iff no other vertex `k` satisfies
/// `weight(i, k)^2 + weight(j, k)^2 < w^2` (empty diametral circle).
/// Candidate `k` are the vertices referenced by `edges`. Prefer
/// [`gabriel_graph_squared`] when squared weights are available directly.
pub fn gabriel_graph<E, W>(edges: &mut [E], weight: W) -> usize
where
    E: WeightedEdge,
    E::Weight: Add<Output = E::Weight> + Mul<Output = E::Weight>,
    W: Fn(E::Index, E::Index) -> E::Weight,
{
    empty_circle_partition(
        edges,
        |w| w * w,
        |i, j, v| {
            let (a, b) = (weight(i, v), weight(j, v));
            a * a + b * b
        },
    )
}

/// Gabriel graph over squared weights.
///
/// Edge weights and `weight_squared` are already squared distances, so the
/// test is `weight_squared(i, k) + weight_squared(j, k) < w` with no square
/// root taken anywhere.
pub fn gabriel_graph_squared<E, W>(edges: &mut [E], weight_squared: W) -> usize
where
    E: WeightedEdge,
    E::Weight: Add<Output = E::Weight>,
    W: Fn(E::Index, E::Index) -> E::Weight,
{
    empty_circle_partition(
        edges,
        |w| w,
        |i, j, v| weight_squared(i, v) + weight_squared(j, v),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Points on a line at the given x coordinates; weight = |dx|.
    fn line(xs: &[f64]) -> (Vec<Weighted<u32, f64>>, impl Fn(u32, u32) -> f64 + '_) {
        let mut edges = Vec::new();
        for i in 0..xs.len() {
            for j in (i + 1)..xs.len() {
                edges.push(Weighted::new(
                    Edge::new(i as u32, j as u32),
                    (xs[i] - xs[j]).abs(),
                ));
            }
        }
        let w = move |a: u32, b: u32| (xs[a as usize] - xs[b as usize]).abs();
        (edges, w)
    }

    fn selected(edges: &[Weighted<u32, f64>], mid: usize) -> Vec<Edge<u32>> {
        let mut v: Vec<_> = edges[..mid].iter().map(|e| e.edge.ordered()).collect();
        v.sort();
        v
    }

    #[test]
    fn nn_on_collinear_points() {
        // 0 --1-- 1 ----3---- 2 --1-- 3
        let (mut edges, _) = line(&[0.0, 1.0, 4.0, 5.0]);
        let mid = nearest_neighbor(&mut edges);
        assert_eq!(selected(&edges, mid), vec![Edge::new(0, 1), Edge::new(2, 3)]);
    }

    #[test]
    fn mst_on_collinear_points_is_the_chain() {
        let (mut edges, _) = line(&[0.0, 1.0, 4.0, 5.0]);
        let mid = minimum_spanning_tree(&mut edges);
        assert_eq!(mid, 3);
        assert_eq!(
            selected(&edges, mid),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]
        );
    }

    #[test]
    fn mst_on_disconnected_graph_is_a_forest() {
        let mut edges = vec![
            (Edge::new(0u32, 1), 1.0),
            (Edge::new(1, 2), 2.0),
            (Edge::new(0, 2), 3.0),
            (Edge::new(5, 6), 1.0),
        ];
        // 5 vertices referenced in 2 components
        assert_eq!(minimum_spanning_tree(&mut edges), 3);
    }

    #[test]
    fn rng_and_gabriel_drop_long_collinear_edges() {
        let (mut edges, w) = line(&[0.0, 1.0, 4.0, 5.0]);
        let mid = relative_neighborhood_graph(&mut edges, &w);
        assert_eq!(
            selected(&edges, mid),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]
        );

        let (mut edges, w) = line(&[0.0, 1.0, 4.0, 5.0]);
        let mid = gabriel_graph(&mut edges, &w);
        assert_eq!(mid, 3);
    }

    #[test]
    fn witness_on_the_diametral_circle_keeps_the_edge() {
        // (1, 1) lies exactly on the circle with diameter (0, 0)-(2, 0)
        let pts = [(0i64, 0i64), (2, 0), (1, 1)];
        let d2 = |a: u32, b: u32| {
            let (p, q) = (pts[a as usize], pts[b as usize]);
            (p.0 - q.0).pow(2) + (p.1 - q.1).pow(2)
        };
        let mut edges = vec![
            (Edge::new(0u32, 1), d2(0, 1)),
            (Edge::new(1, 2), d2(1, 2)),
            (Edge::new(0, 2), d2(0, 2)),
        ];
        assert_eq!(gabriel_graph_squared(&mut edges, d2), 3);

        // moving the witness inside the circle drops the long edge
        let pts = [(0i64, 0i64), (4, 0), (2, 1)];
        let d2 = |a: u32, b: u32| {
            let (p, q) = (pts[a as usize], pts[b as usize]);
            (p.0 - q.0).pow(2) + (p.1 - q.1).pow(2)
        };
        let mut edges = vec![
            (Edge::new(0u32, 1), d2(0, 1)),
            (Edge::new(1, 2), d2(1, 2)),
            (Edge::new(0, 2), d2(0, 2)),
        ];
        let mid = gabriel_graph_squared(&mut edges, d2);
        assert_eq!(mid, 2);
        assert!(edges[..mid].iter().all(|e| e.0 != Edge::new(0, 1)));
    }

    #[test]
    fn selectors_on_empty_input() {
        let mut edges: Vec<Weighted<u32, f64>> = Vec::new();
        assert_eq!(nearest_neighbor(&mut edges), 0);
        assert_eq!(minimum_spanning_tree(&mut edges), 0);
        assert_eq!(relative_neighborhood_graph(&mut edges, |_, _| 0.0), 0);
        assert_eq!(gabriel_graph(&mut edges, |_, _| 0.0), 0);
        assert_eq!(gabriel_graph_squared(&mut edges, |_, _| 0.0), 0);
    }

    #[test]
    fn integer_weights_work() {
        let mut edges = vec![(Edge::new(0u16, 1), 5u32), (Edge::new(1, 2), 1), (Edge::new(0, 2), 2)];
        assert_eq!(minimum_spanning_tree(&mut edges), 2);
        let mut v: Vec<_> = edges[..2].iter().map(|e| e.0).collect();
        v.sort();
        assert_eq!(v, vec![Edge::new(0, 2), Edge::new(1, 2)]);
    }
}
