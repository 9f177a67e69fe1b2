//! jc-graph: the part registry and its chain graph.
//!
//! The registry owns every created part, keeps insertion order for listing,
//! and enforces the shape of the dependency graph: each part references at
//! most one upstream part, of the kind its own kind requires, and a part
//! that others depend on cannot be removed. Chains (root-to-target ancestor
//! sequences) are derived on demand, never stored.

pub mod error;
pub mod part;
pub mod registry;

pub use error::{GraphError, GraphResult};
pub use part::Part;
pub use registry::Registry;
