//! The part registry: ownership, ordering, references, chains.

use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, GraphResult};
use crate::part::Part;
use jc_core::PartId;
use jc_parts::{PartConfig, PartKind};

/// Process-wide set of created parts.
///
/// An explicit, constructed context object: callers create one, thread it
/// through the cycle engine and diagram assembler, and reset it by dropping
/// it. Mutation (add/remove) and chain computation must not interleave; the
/// cycle engine snapshots the configs it needs before computing.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    parts: HashMap<PartId, Part>,
    /// Insertion order, for stable listing.
    order: Vec<PartId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new part, minting its id.
    ///
    /// Validates the configuration and the upstream reference: the upstream
    /// must exist and be of the kind the new part's kind requires.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        config: PartConfig,
        upstream: Option<PartId>,
    ) -> GraphResult<PartId> {
        let part = Part {
            id: PartId::new(),
            name: name.into(),
            config,
            upstream,
        };
        self.insert(part)
    }

    /// Register a part that already carries an id (e.g. reloaded from a
    /// persistence collaborator). Same validation as [`Registry::add`].
    pub fn insert(&mut self, part: Part) -> GraphResult<PartId> {
        part.config.validate()?;
        self.check_upstream(&part)?;

        let id = part.id;
        if self.parts.insert(id, part).is_none() {
            self.order.push(id);
        }
        Ok(id)
    }

    fn check_upstream(&self, part: &Part) -> GraphResult<()> {
        let kind = part.kind();
        match (kind.required_upstream(), part.upstream) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(GraphError::UpstreamForbidden { part: part.id, kind }),
            (Some(requires), None) => Err(GraphError::UpstreamRequired {
                part: part.id,
                kind,
                requires,
            }),
            (Some(requires), Some(reference)) => {
                let upstream = self.parts.get(&reference).ok_or(GraphError::BrokenChain {
                    part: part.id,
                    reference,
                })?;
                if upstream.kind() != requires {
                    return Err(GraphError::WrongUpstreamKind {
                        part: part.id,
                        reference,
                        expected: requires,
                        found: upstream.kind(),
                    });
                }
                Ok(())
            }
        }
    }

    pub fn get(&self, id: PartId) -> GraphResult<&Part> {
        self.parts.get(&id).ok_or(GraphError::NotFound { id })
    }

    pub fn contains(&self, id: PartId) -> bool {
        self.parts.contains_key(&id)
    }

    /// Remove a part.
    ///
    /// Removal is rejected while other parts reference this one as their
    /// upstream: dependents must be removed first (deletion never cascades).
    pub fn remove(&mut self, id: PartId) -> GraphResult<Part> {
        if !self.parts.contains_key(&id) {
            return Err(GraphError::NotFound { id });
        }
        let dependents = self.dependents_of(id);
        if !dependents.is_empty() {
            return Err(GraphError::DependentExists { id, dependents });
        }
        self.order.retain(|&other| other != id);
        self.parts.remove(&id).ok_or(GraphError::NotFound { id })
    }

    /// Ids of parts that reference `id` as their upstream, in insertion order.
    pub fn dependents_of(&self, id: PartId) -> Vec<PartId> {
        self.order
            .iter()
            .filter(|&&candidate| {
                self.parts
                    .get(&candidate)
                    .is_some_and(|p| p.upstream == Some(id))
            })
            .copied()
            .collect()
    }

    /// All parts in insertion order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> + '_ {
        self.order.iter().filter_map(|id| self.parts.get(id))
    }

    /// Parts of one kind, in insertion order.
    pub fn list_by_kind(&self, kind: PartKind) -> Vec<&Part> {
        self.parts().filter(|p| p.kind() == kind).collect()
    }

    /// Parts that no other part references as upstream, in insertion order.
    /// These are the chain leaves a whole-engine run computes.
    pub fn terminal_parts(&self) -> Vec<&Part> {
        let referenced: HashSet<PartId> =
            self.parts().filter_map(|p| p.upstream).collect();
        self.parts().filter(|p| !referenced.contains(&p.id)).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolve the ancestor chain of `id`, ordered root first, target last.
    ///
    /// Walks the upstream references, re-validating each hop defensively:
    /// a missing ancestor, a wrong-kind ancestor, or a revisited part fails
    /// the resolution even though registry invariants should prevent all
    /// three.
    pub fn resolve_chain(&self, id: PartId) -> GraphResult<Vec<&Part>> {
        let mut chain: Vec<&Part> = Vec::new();
        let mut visited: HashSet<PartId> = HashSet::new();

        let mut current = self.get(id)?;
        loop {
            if !visited.insert(current.id) {
                return Err(GraphError::CycleDetected { part: current.id });
            }
            chain.push(current);

            match (current.kind().required_upstream(), current.upstream) {
                (None, _) => break,
                (Some(requires), Some(reference)) => {
                    let upstream =
                        self.parts.get(&reference).ok_or(GraphError::BrokenChain {
                            part: current.id,
                            reference,
                        })?;
                    if upstream.kind() != requires {
                        return Err(GraphError::WrongUpstreamKind {
                            part: current.id,
                            reference,
                            expected: requires,
                            found: upstream.kind(),
                        });
                    }
                    current = upstream;
                }
                (Some(requires), None) => {
                    return Err(GraphError::UpstreamRequired {
                        part: current.id,
                        kind: current.kind(),
                        requires,
                    });
                }
            }
        }

        chain.reverse();
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_parts::{CombustorConfig, CompressorConfig, InletConfig};

    fn inlet_config() -> PartConfig {
        PartConfig::Inlet(InletConfig::new(10_000.0, 0.8, 50.0, 1.0, 0.8, 0.95).unwrap())
    }

    fn compressor_config() -> PartConfig {
        PartConfig::Compressor(CompressorConfig::new(9, 10.0, 0.85).unwrap())
    }

    fn combustor_config() -> PartConfig {
        PartConfig::Combustor(CombustorConfig::new(0.7, 120.0, 0.04, 0.8, 0.2).unwrap())
    }

    #[test]
    fn add_and_get() {
        let mut registry = Registry::new();
        let id = registry.add("intake", inlet_config(), None).unwrap();
        let part = registry.get(id).unwrap();
        assert_eq!(part.name, "intake");
        assert_eq!(part.kind(), PartKind::Inlet);
    }

    #[test]
    fn add_rejects_missing_upstream_reference() {
        let mut registry = Registry::new();
        let ghost = PartId::new();
        let err = registry
            .add("compressor", compressor_config(), Some(ghost))
            .unwrap_err();
        assert!(matches!(err, GraphError::BrokenChain { .. }));
    }

    #[test]
    fn add_rejects_wrong_upstream_kind() {
        let mut registry = Registry::new();
        let inlet = registry.add("intake", inlet_config(), None).unwrap();
        // A combustor must sit behind a compressor, not directly behind an inlet.
        let err = registry
            .add("burner", combustor_config(), Some(inlet))
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::WrongUpstreamKind {
                expected: PartKind::Compressor,
                found: PartKind::Inlet,
                ..
            }
        ));
    }

    #[test]
    fn add_rejects_upstream_on_inlet() {
        let mut registry = Registry::new();
        let first = registry.add("intake", inlet_config(), None).unwrap();
        let err = registry
            .add("second", inlet_config(), Some(first))
            .unwrap_err();
        assert!(matches!(err, GraphError::UpstreamForbidden { .. }));
    }

    #[test]
    fn add_rejects_compressor_without_upstream() {
        let mut registry = Registry::new();
        let err = registry.add("compressor", compressor_config(), None).unwrap_err();
        assert!(matches!(err, GraphError::UpstreamRequired { .. }));
    }

    #[test]
    fn add_rejects_invalid_config() {
        let mut registry = Registry::new();
        let bad = PartConfig::Compressor(CompressorConfig {
            stages: 0,
            pressure_ratio: 10.0,
            eta: 0.85,
        });
        let inlet = registry.add("intake", inlet_config(), None).unwrap();
        let err = registry.add("compressor", bad, Some(inlet)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidConfig(_)));
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let mut registry = Registry::new();
        let a = registry.add("one", inlet_config(), None).unwrap();
        let b = registry.add("two", inlet_config(), None).unwrap();
        let c = registry.add("three", inlet_config(), None).unwrap();

        let ids: Vec<PartId> = registry.parts().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b, c]);

        let inlets = registry.list_by_kind(PartKind::Inlet);
        assert_eq!(inlets.len(), 3);
        assert_eq!(registry.list_by_kind(PartKind::Turbine).len(), 0);
    }

    #[test]
    fn remove_blocked_while_dependents_exist() {
        let mut registry = Registry::new();
        let inlet = registry.add("intake", inlet_config(), None).unwrap();
        let compressor = registry
            .add("compressor", compressor_config(), Some(inlet))
            .unwrap();

        let err = registry.remove(inlet).unwrap_err();
        match err {
            GraphError::DependentExists { id, dependents } => {
                assert_eq!(id, inlet);
                assert_eq!(dependents, vec![compressor]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Removing in dependency order succeeds.
        registry.remove(compressor).unwrap();
        registry.remove(inlet).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn resolve_chain_single_part() {
        let mut registry = Registry::new();
        let inlet = registry.add("intake", inlet_config(), None).unwrap();
        let chain = registry.resolve_chain(inlet).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].id, inlet);
    }

    #[test]
    fn resolve_chain_orders_root_first() {
        let mut registry = Registry::new();
        let inlet = registry.add("intake", inlet_config(), None).unwrap();
        let compressor = registry
            .add("compressor", compressor_config(), Some(inlet))
            .unwrap();
        let combustor = registry
            .add("burner", combustor_config(), Some(compressor))
            .unwrap();

        let chain = registry.resolve_chain(combustor).unwrap();
        let ids: Vec<PartId> = chain.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![inlet, compressor, combustor]);
    }

    #[test]
    fn resolve_chain_detects_deleted_ancestor() {
        let mut registry = Registry::new();
        let inlet = registry.add("intake", inlet_config(), None).unwrap();
        let compressor = registry
            .add("compressor", compressor_config(), Some(inlet))
            .unwrap();

        // Bypass the removal guard to simulate a corrupted reference graph.
        registry.order.retain(|&id| id != inlet);
        registry.parts.remove(&inlet);

        let err = registry.resolve_chain(compressor).unwrap_err();
        assert!(matches!(err, GraphError::BrokenChain { .. }));
    }

    #[test]
    fn terminal_parts_are_unreferenced_leaves() {
        let mut registry = Registry::new();
        let inlet = registry.add("intake", inlet_config(), None).unwrap();
        let compressor = registry
            .add("compressor", compressor_config(), Some(inlet))
            .unwrap();
        let lone_inlet = registry.add("spare intake", inlet_config(), None).unwrap();

        let terminals: Vec<PartId> = registry.terminal_parts().iter().map(|p| p.id).collect();
        assert_eq!(terminals, vec![compressor, lone_inlet]);
    }

    #[test]
    fn dependents_listed_in_order() {
        let mut registry = Registry::new();
        let inlet = registry.add("intake", inlet_config(), None).unwrap();
        let c1 = registry
            .add("compressor one", compressor_config(), Some(inlet))
            .unwrap();
        let c2 = registry
            .add("compressor two", compressor_config(), Some(inlet))
            .unwrap();
        assert_eq!(registry.dependents_of(inlet), vec![c1, c2]);
    }
}
