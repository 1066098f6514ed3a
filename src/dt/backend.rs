//! The contract every Delaunay triangulation backend fulfils.
//!
//! A backend accumulates input shapes (`add_path`, `add_hole`,
//! `add_steiner`) and turns them into a [`Triangulation`] on request. It
//! never panics on malformed input: problems are reported to the
//! [`ErrorHandler`] and the result is empty or partial.

use serde::{Deserialize, Serialize};

use crate::dt::handler::{ErrorHandler, Severity};
use crate::geometry::{Point, Polyline};

/// What to triangulate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangulationPolicy {
    /// Every input vertex as an unconstrained point.
    PointCloud,
    /// Paths and holes as constraint edges; only the faces inside the outer
    /// closed paths and outside the holes are kept.
    ConstrainedDelaunay,
}

/// Raw backend output: vertices plus faces indexing into them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangulation {
    pub vertices: Vec<Point>,
    pub faces: Vec<[usize; 3]>,
}

impl Triangulation {
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// A pluggable Delaunay triangulation implementation.
pub trait DelaunayBackend {
    /// Registry name.
    fn name(&self) -> &str;

    /// Whether [`TriangulationPolicy::ConstrainedDelaunay`] is supported.
    fn supports_constraints(&self) -> bool;

    /// The accumulated input.
    fn input(&self) -> &BackendInput;

    fn input_mut(&mut self) -> &mut BackendInput;

    /// Triangulate the accumulated input.
    fn triangulate(
        &mut self,
        policy: TriangulationPolicy,
        handler: &mut dyn ErrorHandler,
    ) -> Triangulation;

    /// Add an outer boundary or constraint polyline.
    fn add_path(&mut self, path: Polyline) {
        self.input_mut().paths.push(path);
    }

    /// Add a closed polyline bounding a region to leave untriangulated.
    fn add_hole(&mut self, hole: Polyline) {
        self.input_mut().holes.push(hole);
    }

    /// Add unconstrained points.
    fn add_steiner(&mut self, points: &[Point]) {
        self.input_mut().steiner.extend_from_slice(points);
    }

    /// Forget all accumulated input.
    fn clear(&mut self) {
        *self.input_mut() = BackendInput::default();
    }
}

/// Shapes accumulated by a backend before triangulation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendInput {
    pub paths: Vec<Polyline>,
    pub holes: Vec<Polyline>,
    pub steiner: Vec<Point>,
}

/// Input after the shared shape checks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SanitizedInput<'a> {
    pub paths: Vec<&'a Polyline>,
    pub holes: Vec<&'a Polyline>,
    pub steiner: &'a [Point],
}

impl SanitizedInput<'_> {
    /// Every vertex, paths first, then holes, then Steiner points.
    pub fn points(&self) -> Vec<Point> {
        self.paths
            .iter()
            .chain(self.holes.iter())
            .flat_map(|p| p.vertices.iter().copied())
            .chain(self.steiner.iter().copied())
            .collect()
    }

    /// Closed paths, which bound the domain of a constrained triangulation.
    pub fn outer_paths(&self) -> impl Iterator<Item = &Polyline> + '_ {
        self.paths.iter().copied().filter(|p| p.closed)
    }

    /// `true` if `p` lies inside some closed outer path and inside no hole
    /// (even-odd rule per polyline).
    pub fn in_domain(&self, p: &Point) -> bool {
        self.outer_paths().any(|o| o.contains(p)) && !self.holes.iter().any(|h| h.contains(p))
    }
}

impl BackendInput {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.holes.is_empty() && self.steiner.is_empty()
    }

    /// Apply the shape checks shared by all backends.
    ///
    /// Invalid polylines (closed with fewer than 3 vertices, open with fewer
    /// than 2) and open holes are reported at WARNING and skipped. Returns
    /// `None` after reporting when nothing can be triangulated under
    /// `policy`: fewer than 3 points (WARNING), or a constrained request
    /// without a closed outer path (ERROR).
    pub fn sanitize(
        &self,
        policy: TriangulationPolicy,
        handler: &mut dyn ErrorHandler,
    ) -> Option<SanitizedInput<'_>> {
        let mut paths = Vec::with_capacity(self.paths.len());
        for (i, p) in self.paths.iter().enumerate() {
            if p.is_valid() {
                paths.push(p);
            } else {
                handler.report(
                    Severity::Warning,
                    &format!(
                        "skipping path {i}: {} polyline with {} vertices",
                        if p.closed { "closed" } else { "open" },
                        p.vertices.len()
                    ),
                );
            }
        }
        let mut holes = Vec::with_capacity(self.holes.len());
        for (i, h) in self.holes.iter().enumerate() {
            if h.closed && h.is_valid() {
                holes.push(h);
            } else {
                handler.report(
                    Severity::Warning,
                    &format!(
                        "skipping hole {i}: holes must be closed with at least 3 vertices"
                    ),
                );
            }
        }
        let input = SanitizedInput {
            paths,
            holes,
            steiner: &self.steiner,
        };

        let count = input.points().len();
        if count < 3 {
            handler.report(
                Severity::Warning,
                &format!("not enough points to triangulate: {count}"),
            );
            return None;
        }
        if policy == TriangulationPolicy::ConstrainedDelaunay && input.outer_paths().next().is_none()
        {
            handler.report(
                Severity::Error,
                "constrained triangulation requires a closed outer polyline",
            );
            return None;
        }
        Some(input)
    }
}
