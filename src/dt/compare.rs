//! Side-by-side runs of every registered backend on the same input.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::algs::boundary::extract_borders;
use crate::algs::paths::extract_paths;
use crate::dt::backend::{BackendInput, DelaunayBackend, Triangulation, TriangulationPolicy};
use crate::dt::handler::{ErrorHandler, Severity};
use crate::dt::registry::DelaunayRegistry;
use crate::graphs::Triangle;

/// What one backend produced for the shared input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendReport {
    pub name: String,
    pub nb_vertices: usize,
    pub nb_faces: usize,
    pub nb_inner_edges: usize,
    pub nb_border_edges: usize,
    /// Paths returned by `extract_paths` over the border edges. A border
    /// vertex of degree other than 2 ends or splits a path.
    pub nb_border_paths: usize,
    /// Those border paths that close on themselves.
    pub nb_closed_border_paths: usize,
    /// Wall time of `triangulate` alone.
    pub elapsed: Duration,
}

fn summarize(name: &str, tri: &Triangulation, elapsed: Duration) -> BackendReport {
    let faces: Vec<Triangle<usize>> = tri.faces.iter().map(|&f| Triangle::from(f)).collect();
    let borders = extract_borders(&faces);
    let paths = extract_paths(&borders.borders);
    BackendReport {
        name: name.to_owned(),
        nb_vertices: tri.vertices.len(),
        nb_faces: faces.len(),
        nb_inner_edges: borders.nb_inner_edges,
        nb_border_edges: borders.borders.len(),
        nb_border_paths: paths.len(),
        nb_closed_border_paths: paths.iter().filter(|p| p.closed).count(),
        elapsed,
    }
}

/// Run every backend of `registry` on `input` under `policy`.
///
/// Backends that cannot honour a constrained request are skipped with a
/// WARNING. Reports from each backend are forwarded to `handler` prefixed
/// with the backend name.
pub fn compare_backends(
    registry: &DelaunayRegistry,
    input: &BackendInput,
    policy: TriangulationPolicy,
    handler: &mut dyn ErrorHandler,
) -> Vec<BackendReport> {
    let mut reports = Vec::with_capacity(registry.len());
    for mut backend in registry.create_all() {
        let name = backend.name().to_owned();
        if policy == TriangulationPolicy::ConstrainedDelaunay && !backend.supports_constraints() {
            handler.report(
                Severity::Warning,
                &format!("{name}: skipped, constrained triangulation not supported"),
            );
            continue;
        }
        *backend.input_mut() = input.clone();
        let mut prefixed = |s: Severity, m: &str| handler.report(s, &format!("{name}: {m}"));
        let start = Instant::now();
        let tri = backend.triangulate(policy, &mut prefixed);
        let elapsed = start.elapsed();
        let report = summarize(&name, &tri, elapsed);
        log::info!(
            "{}: {} vertices, {} faces, {} border paths ({} closed) in {:?}",
            report.name,
            report.nb_vertices,
            report.nb_faces,
            report.nb_border_paths,
            report.nb_closed_border_paths,
            report.elapsed
        );
        reports.push(report);
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dt::handler::CollectingHandler;
    use crate::geometry::{Point, Polyline};

    #[test]
    fn point_cloud_reports_agree() {
        let reg = DelaunayRegistry::with_default_backends();
        let input = BackendInput {
            steiner: vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.1),
                Point::new(2.2, 1.9),
                Point::new(0.1, 2.0),
                Point::new(1.1, 0.9),
            ],
            ..Default::default()
        };
        let mut h = CollectingHandler::new();
        let reports = compare_backends(&reg, &input, TriangulationPolicy::PointCloud, &mut h);
        assert_eq!(reports.len(), 2);
        for r in &reports {
            assert_eq!(r.nb_vertices, 5);
            assert_eq!(r.nb_faces, 4);
            assert_eq!(r.nb_border_edges, 4);
            assert_eq!(r.nb_inner_edges, 4);
            assert_eq!(r.nb_border_paths, 1);
            assert_eq!(r.nb_closed_border_paths, 1);
        }
        assert!(h.reports.is_empty());
    }

    #[test]
    fn pinch_vertex_splits_the_border() {
        // two triangles touching only at vertex 0
        let tri = Triangulation {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(-1.0, 0.0),
                Point::new(-1.0, -1.0),
            ],
            faces: vec![[0, 1, 2], [0, 3, 4]],
        };
        let r = summarize("pinch", &tri, Duration::ZERO);
        assert_eq!(r.nb_border_edges, 6);
        assert_eq!(r.nb_inner_edges, 0);
        assert_eq!(r.nb_border_paths, 2);
        assert_eq!(r.nb_closed_border_paths, 2);

        // three triangles pinched pairwise into a ring: every border path
        // runs between two pinch vertices
        let tri = Triangulation {
            vertices: vec![Point::new(0.0, 0.0); 6],
            faces: vec![[0, 1, 2], [2, 3, 4], [4, 5, 0]],
        };
        let r = summarize("ring", &tri, Duration::ZERO);
        assert_eq!(r.nb_border_edges, 9);
        assert_eq!(r.nb_border_paths, 6);
        assert_eq!(r.nb_closed_border_paths, 0);
    }

    #[test]
    fn constrained_skips_point_cloud_backends() {
        let reg = DelaunayRegistry::with_default_backends();
        let input = BackendInput {
            paths: vec![Polyline::new_closed(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ])],
            ..Default::default()
        };
        let mut h = CollectingHandler::new();
        let reports =
            compare_backends(&reg, &input, TriangulationPolicy::ConstrainedDelaunay, &mut h);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "spade");
        assert_eq!(reports[0].nb_faces, 2);
        assert_eq!(h.worst(), Some(Severity::Warning));
    }
}
