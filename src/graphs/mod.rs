//! Graph data model: indices, edges, paths, triangles and union-find.
//!
//! All containers are plain values parameterised by an [`Index`] type; the
//! algorithms that operate on them live in [`crate::algs`].

pub mod edge;
pub mod index;
pub mod path;
pub mod triangle;
pub mod union_find;

pub use edge::{Edge, EdgeSoup, ordered_edge};
pub use index::Index;
pub use path::Path;
pub use triangle::{Triangle, TriangleSoup, flip_orientation};
pub use union_find::UnionFind;
