//! Runtime-toggleable validation options.
//!
//! Debug builds assert preconditions through `debug_invariants!`. Release
//! builds skip them unless a caller opts in through one of the `try_*`
//! entry points with a [`ValidationOptions`] value.

use hashbrown::HashMap;

use crate::graph_error::GraphError;
use crate::graphs::{Edge, Index};

/// Optional validation toggles for the `try_*` graph algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject undefined indices and loop edges.
    pub check_loops: bool,
    /// Reject repeated undirected edges.
    pub check_duplicates: bool,
    /// How to handle undirected edges shared by more than two triangles.
    pub non_manifold: NonManifoldHandling,
}

impl ValidationOptions {
    /// Enable all checks; non-manifold edges are errors.
    pub fn all() -> Self {
        Self {
            check_loops: true,
            check_duplicates: true,
            non_manifold: NonManifoldHandling::Error,
        }
    }

    /// Disable all checks.
    pub fn none() -> Self {
        Self {
            check_loops: false,
            check_duplicates: false,
            non_manifold: NonManifoldHandling::Ignore,
        }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Behavior for non-manifold detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonManifoldHandling {
    /// Skip non-manifold detection.
    Ignore,
    /// Log a warning on non-manifold edges.
    Warn,
    /// Return an error on the first non-manifold edge.
    Error,
}

/// Check an edge soup against `options`, returning the first violation.
pub fn validate_edge_soup_with<I: Index>(
    soup: &[Edge<I>],
    options: &ValidationOptions,
) -> Result<(), GraphError> {
    let mut seen = hashbrown::HashSet::with_capacity(soup.len());
    for (position, e) in soup.iter().enumerate() {
        if options.check_loops {
            if !e.is_defined() {
                return Err(GraphError::UndefinedIndex { position });
            }
            if e.is_loop() {
                return Err(GraphError::LoopEdge {
                    position,
                    vertex: e.orig().to_raw(),
                });
            }
        }
        if options.check_duplicates && !seen.insert(e.ordered()) {
            let key = e.ordered();
            return Err(GraphError::DuplicateEdge {
                orig: key.orig().to_raw(),
                dest: key.dest().to_raw(),
            });
        }
    }
    Ok(())
}

/// Apply `handling` to an ordered-edge occurrence map built from a triangle
/// soup. Counts of 1 (border) and 2 (inner) are manifold.
pub fn check_manifold_counts<I: Index>(
    counts: &HashMap<Edge<I>, usize>,
    handling: NonManifoldHandling,
) -> Result<(), GraphError> {
    if handling == NonManifoldHandling::Ignore {
        return Ok(());
    }
    let mut offenders: Vec<(Edge<I>, usize)> = counts
        .iter()
        .filter(|&(_, &count)| count > 2)
        .map(|(&e, &count)| (e, count))
        .collect();
    offenders.sort_unstable();
    for (e, count) in offenders {
        match handling {
            NonManifoldHandling::Ignore => {}
            NonManifoldHandling::Warn => {
                log::warn!(
                    "non-manifold edge ({}, {}) shared by {count} triangles",
                    e.orig(),
                    e.dest()
                );
            }
            NonManifoldHandling::Error => {
                return Err(GraphError::NonManifoldEdge {
                    orig: e.orig().to_raw(),
                    dest: e.dest().to_raw(),
                    count,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_gate_checks() {
        let soup = vec![Edge::new(0u32, 1), Edge::new(1, 1), Edge::new(1, 0)];
        assert!(validate_edge_soup_with(&soup, &ValidationOptions::none()).is_ok());

        let loops_only = ValidationOptions {
            check_duplicates: false,
            ..ValidationOptions::all()
        };
        assert_eq!(
            validate_edge_soup_with(&soup, &loops_only),
            Err(GraphError::LoopEdge {
                position: 1,
                vertex: 1
            })
        );

        let dups_only = ValidationOptions {
            check_loops: false,
            ..ValidationOptions::all()
        };
        assert_eq!(
            validate_edge_soup_with(&soup, &dups_only),
            Err(GraphError::DuplicateEdge { orig: 0, dest: 1 })
        );
    }

    #[test]
    fn manifold_counts() {
        let mut counts = HashMap::new();
        counts.insert(Edge::new(0u32, 1), 2);
        counts.insert(Edge::new(1u32, 2), 3);
        assert!(check_manifold_counts(&counts, NonManifoldHandling::Ignore).is_ok());
        assert!(check_manifold_counts(&counts, NonManifoldHandling::Warn).is_ok());
        assert_eq!(
            check_manifold_counts(&counts, NonManifoldHandling::Error),
            Err(GraphError::NonManifoldEdge {
                orig: 1,
                dest: 2,
                count: 3
            })
        );
    }
}
