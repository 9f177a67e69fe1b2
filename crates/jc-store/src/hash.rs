//! Content-based keys for cached analyses.

use crate::record::PartRecord;
use jc_graph::Part;
use sha2::{Digest, Sha256};

/// Key under which a chain's analysis result is cached.
///
/// Hashes the chain's records (configs, ids, upstream references, in chain
/// order) plus the engine version, so any configuration change — or a
/// different chain ending at the same part — produces a different key and
/// invalidates the cached analysis.
pub fn analysis_key(chain: &[Part], engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    for part in chain {
        let record = PartRecord::from_part(part);
        let record_json = serde_json::to_string(&record).unwrap_or_default();
        hasher.update(record_json.as_bytes());
    }
    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
