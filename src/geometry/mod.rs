//! Geometry support types for dt-toolkit.
//!
//! Points, bounding boxes, polylines and the geometric graphs (`Edges`,
//! `Triangles`) exchanged with triangulation backends.

pub mod bbox;
pub mod point;
pub mod polyline;
pub mod soups;

pub use bbox::BoundingBox;
pub use point::{Point, PointCloud};
pub use polyline::Polyline;
pub use soups::{Edges, Triangles};
