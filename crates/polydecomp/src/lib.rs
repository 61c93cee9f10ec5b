//! Convex decomposition of simple polygons.
//!
//! Pipeline
//! - `store`: validated vertex arena; polygons are `Vec<VertexId>` in clockwise order.
//! - `partition`: greedy scan-and-extend chains, pruned by notches, emitted one
//!   convex piece at a time.
//! - `merge`: removes diagonals whose two adjacent pieces are convex together.
//! - `pipeline`: both stages behind one call.
//!
//! Supporting modules: `predicates` (orientation, containment, convexity),
//! `topology` (cyclic neighbours), `notch` (reflex vertices), `io` (vertex-list
//! parsing, edge listings), `rand` (random star polygons for tests and benches).

pub mod error;
pub mod io;
pub mod merge;
pub mod notch;
pub mod partition;
pub mod pipeline;
pub mod predicates;
pub mod rand;
pub mod store;
pub mod topology;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::DecompError;
pub use merge::{Merge, MergeStrategy};
pub use partition::{Partition, PartitionCfg};
pub use pipeline::{decompose, decompose_points, DecompCfg, Decomposition};
pub use store::{Polygon, PolygonStore, Vertex, VertexId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::io::{edge_records, parse_vertex_list, write_edge_records, EdgeRecord};
    pub use crate::merge::{diagonals, merge, Diagonal, MergeStrategy};
    pub use crate::notch::{check_notch, check_vertex_notch, notches};
    pub use crate::partition::{partition, partition_polygon, Partition, PartitionCfg};
    pub use crate::pipeline::{decompose, decompose_points, DecompCfg, Decomposition};
    pub use crate::predicates::{is_convex_turn, is_inside, side, Bounds2, Side};
    pub use crate::store::{Polygon, PolygonStore, VertexId};
    pub use crate::topology::{next, prev};
    pub use crate::DecompError;
    pub use nalgebra::Vector2;
}

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod tests_props;
