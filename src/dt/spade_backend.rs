//! Backend on top of the `spade` crate.
//!
//! Supports both policies. For constrained triangulations every segment of
//! every valid path and hole becomes a constraint edge, then faces whose
//! centroid falls outside the domain (outside all closed outer paths, or
//! inside a hole) are dropped.

use spade::handles::FixedVertexHandle;
use spade::{ConstrainedDelaunayTriangulation, Point2, Triangulation as _};

use crate::dt::backend::{
    BackendInput, DelaunayBackend, SanitizedInput, Triangulation, TriangulationPolicy,
};
use crate::dt::handler::{ErrorHandler, Severity};
use crate::geometry::Point;

pub const SPADE_BACKEND_NAME: &str = "spade";

#[derive(Clone, Debug, Default)]
pub struct SpadeBackend {
    input: BackendInput,
}

impl SpadeBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

type Cdt = ConstrainedDelaunayTriangulation<Point2<f64>>;

/// Insert `points`, returning one handle per input point (`None` when spade
/// rejected the coordinates).
fn insert_all(
    cdt: &mut Cdt,
    points: &[Point],
    handler: &mut dyn ErrorHandler,
) -> Vec<Option<FixedVertexHandle>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| match cdt.insert(Point2::new(p.x, p.y)) {
            Ok(h) => Some(h),
            Err(e) => {
                handler.report(
                    Severity::Warning,
                    &format!("skipping point {i} ({}, {}): {e:?}", p.x, p.y),
                );
                None
            }
        })
        .collect()
}

/// Add every segment of the sanitized paths and holes as a constraint.
/// `handles` follows the vertex order of [`SanitizedInput::points`].
fn add_constraints(
    cdt: &mut Cdt,
    input: &SanitizedInput<'_>,
    handles: &[Option<FixedVertexHandle>],
    handler: &mut dyn ErrorHandler,
) {
    let mut base = 0usize;
    for line in input.paths.iter().chain(input.holes.iter()) {
        for (a, b) in line.segment_indices() {
            let (Some(ha), Some(hb)) = (handles[base + a], handles[base + b]) else {
                continue;
            };
            if ha == hb {
                continue;
            }
            if cdt.can_add_constraint(ha, hb) {
                cdt.add_constraint(ha, hb);
            } else {
                handler.report(
                    Severity::Warning,
                    &format!(
                        "skipping constraint ({}, {}): crosses an existing constraint",
                        base + a,
                        base + b
                    ),
                );
            }
        }
        base += line.vertices.len();
    }
}

fn export(cdt: &Cdt, keep: impl Fn(&Point) -> bool) -> Triangulation {
    let vertices: Vec<Point> = cdt
        .vertices()
        .map(|v| {
            let p = v.position();
            Point::new(p.x, p.y)
        })
        .collect();
    let faces = cdt
        .inner_faces()
        .map(|f| f.vertices().map(|v| v.fix().index()))
        .filter(|&[a, b, c]| keep(&Point::centroid(&vertices[a], &vertices[b], &vertices[c])))
        .collect();
    Triangulation { vertices, faces }
}

impl DelaunayBackend for SpadeBackend {
    fn name(&self) -> &str {
        SPADE_BACKEND_NAME
    }

    fn supports_constraints(&self) -> bool {
        true
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
        let Some(input) = self.input.sanitize(policy, handler) else {
            return Triangulation::default();
        };
        let points = input.points();
        let mut cdt = Cdt::new();
        let handles = insert_all(&mut cdt, &points, handler);

        let result = match policy {
            TriangulationPolicy::PointCloud => export(&cdt, |_| true),
            TriangulationPolicy::ConstrainedDelaunay => {
                add_constraints(&mut cdt, &input, &handles, handler);
                export(&cdt, |c| input.in_domain(c))
            }
        };
        if result.is_empty() {
            handler.report(
                Severity::Warning,
                "spade produced no faces (degenerate or collinear input)",
            );
        }
        log::debug!(
            "spade: {} points -> {} vertices, {} faces",
            points.len(),
            result.vertices.len(),
            result.faces.len()
        );
        result
    }
}
