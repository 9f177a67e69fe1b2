//! File-backed analysis result cache.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Metadata stored alongside a cached analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisManifest {
    /// Content-hash key (see [`crate::hash::analysis_key`]).
    pub key: String,
    /// Id of the part whose chain was analyzed.
    pub part_id: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// Version of the computation engine that produced the payload.
    pub engine_version: String,
}

impl AnalysisManifest {
    pub fn new(key: String, part_id: String, engine_version: String) -> Self {
        Self {
            key,
            part_id,
            created_at: chrono::Utc::now().to_rfc3339(),
            engine_version,
        }
    }
}

/// Directory-per-analysis store, keyed by content hash.
///
/// The payload is an opaque JSON document (the assembled diagram plus
/// summaries); this store never interprets it. Because keys are content
/// hashes of the producing configuration, a cached entry can be served as
/// long as its key still matches — idempotence of the computation makes the
/// cached and recomputed payloads interchangeable.
#[derive(Clone)]
pub struct AnalysisStore {
    root_dir: PathBuf,
}

impl AnalysisStore {
    pub fn new(root_dir: PathBuf) -> StoreResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Conventional location next to an engine definition file.
    pub fn for_engine_file(engine_path: &Path) -> StoreResult<Self> {
        let parent = engine_path.parent().unwrap_or_else(|| Path::new("."));
        Self::new(parent.join(".jetcycle").join("analyses"))
    }

    fn analysis_dir(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    pub fn has_analysis(&self, key: &str) -> bool {
        self.analysis_dir(key).join("manifest.json").exists()
    }

    pub fn save_analysis(
        &self,
        manifest: &AnalysisManifest,
        payload_json: &str,
    ) -> StoreResult<()> {
        let dir = self.analysis_dir(&manifest.key);
        fs::create_dir_all(&dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(dir.join("manifest.json"), manifest_json)?;
        fs::write(dir.join("analysis.json"), payload_json)?;
        Ok(())
    }

    pub fn load_manifest(&self, key: &str) -> StoreResult<AnalysisManifest> {
        let path = self.analysis_dir(key).join("manifest.json");
        if !path.exists() {
            return Err(StoreError::AnalysisNotFound {
                key: key.to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_payload(&self, key: &str) -> StoreResult<String> {
        let path = self.analysis_dir(key).join("analysis.json");
        if !path.exists() {
            return Err(StoreError::AnalysisNotFound {
                key: key.to_string(),
            });
        }
        Ok(fs::read_to_string(path)?)
    }

    pub fn delete_analysis(&self, key: &str) -> StoreResult<()> {
        let dir = self.analysis_dir(key);
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }
}
