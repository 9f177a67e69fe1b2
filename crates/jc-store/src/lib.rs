//! jc-store: the persistence collaborator contract.
//!
//! Defines the serializable part record (id, kind tag, display name, ordered
//! numeric config parameters, optional upstream id) with loss-free
//! conversion to and from registry parts, engine definition files (JSON or
//! YAML), and a file-backed cache of analysis results keyed by a content
//! hash of the chain configuration that produced them.

pub mod engine_file;
pub mod error;
pub mod hash;
pub mod record;
pub mod store;

pub use engine_file::EngineFile;
pub use error::{StoreError, StoreResult};
pub use hash::analysis_key;
pub use record::PartRecord;
pub use store::{AnalysisManifest, AnalysisStore};
