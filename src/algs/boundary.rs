//! Border extraction for triangle soups.
//!
//! In a 2-manifold triangulation (with boundary) every undirected edge is
//! shared by one triangle (border) or two (inner). The border edges form the
//! boundary curve(s) of the surface.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::algs::validation::{ValidationOptions, check_manifold_counts};
use crate::algs::validity::validate_triangle_soup;
use crate::graph_error::GraphError;
use crate::graphs::{Edge, Index, Triangle};

/// Border edges of a triangle soup plus the number of inner edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders<I = u32> {
    /// Edges used by exactly one triangle, in the direction that triangle
    /// walks them, ordered by first appearance.
    pub borders: Vec<Edge<I>>,
    /// Number of undirected edges shared by two triangles.
    pub nb_inner_edges: usize,
}

fn edge_counts<I: Index>(triangles: &[Triangle<I>]) -> HashMap<Edge<I>, usize> {
    let mut counts: HashMap<Edge<I>, usize> = HashMap::with_capacity(triangles.len() * 2);
    for t in triangles {
        for e in t.edges() {
            *counts.entry(e.ordered()).or_insert(0) += 1;
        }
    }
    counts
}

fn collect_borders<I: Index>(
    triangles: &[Triangle<I>],
    counts: &HashMap<Edge<I>, usize>,
) -> Borders<I> {
    let borders = triangles
        .iter()
        .flat_map(|t| t.edges())
        .filter(|e| counts.get(&e.ordered()) == Some(&1))
        .collect();
    let nb_inner_edges = counts.values().filter(|&&c| c != 1).count();
    Borders {
        borders,
        nb_inner_edges,
    }
}

/// Extract the border of a manifold triangle soup.
///
/// Manifoldness (every count is 1 or 2) is a precondition, asserted only
/// when invariant checking is enabled. Use [`try_extract_borders`] to
/// validate at runtime.
pub fn extract_borders<I: Index>(triangles: &[Triangle<I>]) -> Borders<I> {
    let counts = edge_counts(triangles);
    crate::debug_invariants!(
        check_manifold_counts(&counts, crate::algs::validation::NonManifoldHandling::Error),
        "extract_borders"
    );
    collect_borders(triangles, &counts)
}

/// [`extract_borders`] with an explicit validation pass driven by `options`.
///
/// Degenerate triangles are rejected when `options.check_loops` is set;
/// non-manifold edges are handled per `options.non_manifold`.
pub fn try_extract_borders<I: Index>(
    triangles: &[Triangle<I>],
    options: &ValidationOptions,
) -> Result<Borders<I>, GraphError> {
    if options.check_loops {
        validate_triangle_soup(triangles)?;
    }
    let counts = edge_counts(triangles);
    check_manifold_counts(&counts, options.non_manifold)?;
    Ok(collect_borders(triangles, &counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::validation::NonManifoldHandling;
    use crate::debug_invariants::invariants_enabled;

    #[test]
    fn two_triangles_share_one_inner_edge() {
        let tris = vec![Triangle::new(0u32, 1, 2), Triangle::new(2, 1, 3)];
        let b = extract_borders(&tris);
        assert_eq!(b.nb_inner_edges, 1);
        assert_eq!(
            b.borders,
            vec![
                Edge::new(0, 1),
                Edge::new(2, 0),
                Edge::new(1, 3),
                Edge::new(3, 2)
            ]
        );
    }

    #[test]
    fn non_manifold_fan_is_rejected() {
        let tris = vec![
            Triangle::new(0u32, 1, 2),
            Triangle::new(1, 0, 3),
            Triangle::new(0, 1, 4),
        ];
        let err = try_extract_borders(&tris, &ValidationOptions::all()).unwrap_err();
        assert_eq!(
            err,
            GraphError::NonManifoldEdge {
                orig: 0,
                dest: 1,
                count: 3
            }
        );

        let lenient = ValidationOptions {
            non_manifold: NonManifoldHandling::Warn,
            ..ValidationOptions::all()
        };
        let b = try_extract_borders(&tris, &lenient).unwrap();
        assert_eq!(b.borders.len(), 6);
        assert_eq!(b.nb_inner_edges, 1);
    }

    #[test]
    fn non_manifold_panics_only_with_invariants_enabled() {
        let tris = vec![
            Triangle::new(0u32, 1, 2),
            Triangle::new(1, 0, 3),
            Triangle::new(0, 1, 4),
        ];
        let result = std::panic::catch_unwind(|| extract_borders(&tris));
        assert_eq!(result.is_err(), invariants_enabled());
    }

    #[test]
    fn degenerate_triangle_rejected_in_strict_mode() {
        let tris = vec![Triangle::new(0u32, 0, 1)];
        assert_eq!(
            try_extract_borders(&tris, &ValidationOptions::all()),
            Err(GraphError::DegenerateTriangle { position: 0 })
        );
    }
}
