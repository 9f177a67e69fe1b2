//! Engine definition files: a named list of part records.

use std::fs;
use std::path::Path;

use crate::error::StoreResult;
use crate::record::PartRecord;
use jc_graph::Registry;
use serde::{Deserialize, Serialize};

pub const ENGINE_FILE_VERSION: u32 = 1;

/// On-disk engine definition: the complete registry content, in insertion
/// order, as flat part records. JSON and YAML are both accepted, chosen by
/// file extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub parts: Vec<PartRecord>,
}

impl EngineFile {
    /// Snapshot a registry.
    pub fn from_registry(name: impl Into<String>, registry: &Registry) -> Self {
        Self {
            version: ENGINE_FILE_VERSION,
            name: name.into(),
            parts: registry.parts().map(PartRecord::from_part).collect(),
        }
    }

    /// Rebuild a registry from the stored records, preserving ids and order.
    ///
    /// Records are inserted in file order, so upstream parts must precede
    /// their dependents, which `from_registry` guarantees by construction.
    pub fn to_registry(&self) -> StoreResult<Registry> {
        let mut registry = Registry::new();
        for record in &self.parts {
            registry.insert(record.to_part()?)?;
        }
        Ok(registry)
    }

    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path)?;
        if is_yaml(path) {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }

    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        fs::write(path, content)?;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_parts::{CompressorConfig, InletConfig, PartConfig};

    fn small_registry() -> Registry {
        let mut registry = Registry::new();
        let inlet = registry
            .add(
                "intake",
                PartConfig::Inlet(
                    InletConfig::new(10_000.0, 0.8, 50.0, 1.0, 0.8, 0.95).unwrap(),
                ),
                None,
            )
            .unwrap();
        registry
            .add(
                "compressor",
                PartConfig::Compressor(CompressorConfig::new(9, 10.0, 0.85).unwrap()),
                Some(inlet),
            )
            .unwrap();
        registry
    }

    #[test]
    fn registry_snapshot_and_rebuild() {
        let registry = small_registry();
        let file = EngineFile::from_registry("test engine", &registry);
        assert_eq!(file.parts.len(), 2);

        let rebuilt = file.to_registry().unwrap();
        assert_eq!(rebuilt.len(), registry.len());

        let before: Vec<_> = registry.parts().cloned().collect();
        let after: Vec<_> = rebuilt.parts().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn json_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("jc_store_json_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("engine.json");

        let file = EngineFile::from_registry("json engine", &small_registry());
        file.save(&path).unwrap();
        let loaded = EngineFile::load(&path).unwrap();
        assert_eq!(file, loaded);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn yaml_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("jc_store_yaml_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("engine.yaml");

        let file = EngineFile::from_registry("yaml engine", &small_registry());
        file.save(&path).unwrap();
        let loaded = EngineFile::load(&path).unwrap();
        assert_eq!(file, loaded);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
