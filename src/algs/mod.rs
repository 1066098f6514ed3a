//! Re-export public algorithms.

pub mod boundary;
pub mod container;
pub mod convert;
pub mod degree;
pub mod filter;
pub mod paths;
pub mod proximity;
pub mod renumber;
pub mod validation;
pub mod validity;

pub use boundary::{Borders, extract_borders, try_extract_borders};
pub use container::{GraphSize, IndexContainer, minmax_indices, to_vertex_set};
pub use convert::{ToEdgeSoup, to_edge_soup};
pub use degree::{DegreeTable, max_degree, min_degree, minmax_degree};
pub use filter::{filter_out_duplicates, filter_out_duplicates_and_loops, filter_out_loops};
pub use paths::{extract_paths, try_extract_paths};
pub use proximity::{
    Weighted, WeightedEdge, gabriel_graph, gabriel_graph_squared, minimum_spanning_tree,
    nearest_neighbor, relative_neighborhood_graph,
};
pub use renumber::remap_indices;
pub use validation::{NonManifoldHandling, ValidationOptions};
pub use validity::{
    HasDuplicates, Validity, validate_edge_soup, validate_path, validate_triangle_soup,
};
