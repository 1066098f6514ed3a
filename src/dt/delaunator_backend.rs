//! Backend on top of the `delaunator` crate (point clouds only).

use crate::dt::backend::{BackendInput, DelaunayBackend, Triangulation, TriangulationPolicy};
use crate::dt::handler::{ErrorHandler, Severity};
use crate::geometry::Point;

pub const DELAUNATOR_BACKEND_NAME: &str = "delaunator";

#[derive(Clone, Debug, Default)]
pub struct DelaunatorBackend {
    input: BackendInput,
}

impl DelaunatorBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelaunayBackend for DelaunatorBackend {
    fn name(&self) -> &str {
        DELAUNATOR_BACKEND_NAME
    }

    fn supports_constraints(&self) -> bool {
        false
    }

    fn input(&self) -> &BackendInput {
        &self.input
    }

    fn input_mut(&mut self) -> &mut BackendInput {
        &mut self.input
    }

    fn triangulate(
        &mut self,
        policy: TriangulationPolicy,
        handler: &mut dyn ErrorHandler,
    ) -> Triangulation {
        if policy == TriangulationPolicy::ConstrainedDelaunay {
            handler.report(
                Severity::Error,
                "delaunator does not support constrained triangulations",
            );
            return Triangulation::default();
        }
        let Some(input) = self.input.sanitize(policy, handler) else {
            return Triangulation::default();
        };
        let vertices = input.points();
        if let Some(i) = vertices.iter().position(|p| !p.is_finite()) {
            handler.report(
                Severity::Error,
                &format!("delaunator cannot triangulate non-finite point {i}"),
            );
            return Triangulation::default();
        }

        let raw: Vec<delaunator::Point> = vertices
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let tri = delaunator::triangulate(&raw);
        let faces: Vec<[usize; 3]> = tri
            .triangles
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        if faces.is_empty() {
            handler.report(
                Severity::Warning,
                "delaunator produced no faces (degenerate or collinear input)",
            );
        }
        log::debug!(
            "delaunator: {} points -> {} faces",
            vertices.len(),
            faces.len()
        );
        Triangulation { vertices, faces }
    }
}
