//! The engine service: registry + gas model + store behind one interface.

use std::path::Path;

use crate::analysis::{AnalysisReport, StageSummary};
use crate::error::AppResult;
use jc_core::PartId;
use jc_cycle::{CycleEngine, EngineTrace};
use jc_diagram::build_ts_diagram;
use jc_gas::GasModel;
use jc_graph::{Part, Registry};
use jc_parts::PartConfig;
use jc_store::{AnalysisManifest, AnalysisStore, EngineFile, PartRecord, analysis_key};

/// Version stamped into analysis cache keys; bumping it invalidates every
/// cached analysis produced by older computation code.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application service over one registry.
///
/// Mutation (create/delete) and analysis go through `&mut self`/`&self`
/// respectively, so the borrow checker enforces the snapshot discipline the
/// computation engine relies on: no mutation can interleave with a running
/// analysis.
pub struct EngineService {
    registry: Registry,
    model: Box<dyn GasModel>,
    store: Option<AnalysisStore>,
}

impl EngineService {
    pub fn new(model: Box<dyn GasModel>) -> Self {
        Self {
            registry: Registry::new(),
            model,
            store: None,
        }
    }

    /// Attach a file-backed cache for analysis results.
    pub fn with_store(mut self, store: AnalysisStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Create a part from a validated configuration.
    pub fn create_part(
        &mut self,
        name: impl Into<String>,
        config: PartConfig,
        upstream: Option<PartId>,
    ) -> AppResult<PartId> {
        Ok(self.registry.add(name, config, upstream)?)
    }

    /// Create a part from a persistence record, preserving its id.
    pub fn create_from_record(&mut self, record: &PartRecord) -> AppResult<PartId> {
        Ok(self.registry.insert(record.to_part()?)?)
    }

    /// All parts in creation order, as persistence records.
    pub fn list_parts(&self) -> Vec<PartRecord> {
        self.registry.parts().map(PartRecord::from_part).collect()
    }

    /// Delete a part. Fails while other parts reference it as upstream.
    pub fn delete_part(&mut self, id: PartId) -> AppResult<()> {
        self.registry.remove(id)?;
        Ok(())
    }

    /// Analyze one part's chain: compute it, assemble its diagram, and
    /// return per-part summaries.
    ///
    /// Results are cached under a content hash of the chain's configuration;
    /// a cached report is served only while every config that produced it is
    /// unchanged, which determinism makes indistinguishable from recomputing.
    pub fn analyze_part(&self, id: PartId) -> AppResult<AnalysisReport> {
        let snapshot: Vec<Part> = self
            .registry
            .resolve_chain(id)?
            .into_iter()
            .cloned()
            .collect();
        let key = analysis_key(&snapshot, ENGINE_VERSION);

        if let Some(store) = &self.store
            && store.has_analysis(&key)
        {
            let payload = store.load_payload(&key)?;
            let report: AnalysisReport = serde_json::from_str(&payload)?;
            tracing::debug!(%id, key, "analysis served from cache");
            return Ok(report);
        }

        let engine = CycleEngine::new(self.model.as_ref());
        let stages = engine.compute_chain(&self.registry, id)?;

        let mut trace = EngineTrace::default();
        for stage in &stages {
            trace.push_stage(stage);
        }
        let diagram = build_ts_diagram(&trace, self.model.as_ref())?;

        let report = AnalysisReport {
            stages: stages.iter().map(StageSummary::from_stage).collect(),
            diagram,
        };

        if let Some(store) = &self.store {
            let manifest =
                AnalysisManifest::new(key.clone(), id.to_string(), ENGINE_VERSION.to_string());
            store.save_analysis(&manifest, &serde_json::to_string(&report)?)?;
            tracing::debug!(%id, key, "analysis computed and cached");
        }

        Ok(report)
    }

    /// Analyze the whole engine: every terminal part's chain, merged into
    /// one multi-segment report.
    pub fn analyze_engine(&self) -> AppResult<AnalysisReport> {
        let engine = CycleEngine::new(self.model.as_ref());
        let terminal_ids: Vec<PartId> = self
            .registry
            .terminal_parts()
            .iter()
            .map(|p| p.id)
            .collect();

        let mut trace = EngineTrace::default();
        let mut summaries: Vec<StageSummary> = Vec::new();
        for id in terminal_ids {
            let stages = engine.compute_chain(&self.registry, id)?;
            for stage in &stages {
                if summaries.iter().all(|s| s.part_id != stage.part_id) {
                    trace.push_stage(stage);
                    summaries.push(StageSummary::from_stage(stage));
                }
            }
        }

        let diagram = build_ts_diagram(&trace, self.model.as_ref())?;
        Ok(AnalysisReport {
            stages: summaries,
            diagram,
        })
    }

    /// Snapshot the registry into an engine definition file.
    pub fn save_engine(&self, name: &str, path: &Path) -> AppResult<()> {
        EngineFile::from_registry(name, &self.registry).save(path)?;
        Ok(())
    }

    /// Replace the registry with the contents of an engine definition file.
    pub fn load_engine(&mut self, path: &Path) -> AppResult<String> {
        let file = EngineFile::load(path)?;
        self.registry = file.to_registry()?;
        Ok(file.name)
    }
}
