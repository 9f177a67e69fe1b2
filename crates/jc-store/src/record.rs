//! The serializable part record.

use crate::error::{StoreError, StoreResult};
use jc_core::PartId;
use jc_graph::Part;
use jc_parts::{
    CombustorConfig, CompressorConfig, InletConfig, PartConfig, PartKind, TurbineConfig,
};
use serde::{Deserialize, Serialize};

/// Flat, storage-format-agnostic snapshot of one part.
///
/// Config parameters are ordered (key, value) pairs rather than a nested
/// struct, so any document store can hold them without schema knowledge.
/// Round-trip fidelity is the contract: converting a part to a record and
/// back reproduces a part whose `compute` output is identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    pub id: PartId,
    /// Kind tag, e.g. "Compressor".
    pub part_type: String,
    /// User-assigned display name.
    pub name: String,
    /// Ordered numeric configuration parameters.
    pub params: Vec<(String, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<PartId>,
}

impl PartRecord {
    pub fn from_part(part: &Part) -> Self {
        let params = match &part.config {
            PartConfig::Inlet(c) => vec![
                ("altitude_m".to_string(), c.altitude_m),
                ("mach".to_string(), c.mach),
                ("mass_flow_kg_s".to_string(), c.mass_flow_kg_s),
                ("entrance_area_m2".to_string(), c.entrance_area_m2),
                ("face_area_m2".to_string(), c.face_area_m2),
                ("eta".to_string(), c.eta),
            ],
            PartConfig::Compressor(c) => vec![
                ("stages".to_string(), f64::from(c.stages)),
                ("pressure_ratio".to_string(), c.pressure_ratio),
                ("eta".to_string(), c.eta),
            ],
            PartConfig::Combustor(c) => vec![
                ("throttle".to_string(), c.throttle),
                ("nominal_velocity_m_s".to_string(), c.nominal_velocity_m_s),
                ("pressure_loss".to_string(), c.pressure_loss),
                ("max_fuel_fraction".to_string(), c.max_fuel_fraction),
                ("min_fuel_fraction".to_string(), c.min_fuel_fraction),
            ],
            PartConfig::Turbine(c) => vec![
                ("stages".to_string(), f64::from(c.stages)),
                ("eta".to_string(), c.eta),
                ("mechanical_loss".to_string(), c.mechanical_loss),
            ],
        };

        Self {
            id: part.id,
            part_type: part.kind().label().to_string(),
            name: part.name.clone(),
            params,
            upstream: part.upstream,
        }
    }

    /// Rebuild the registry part. The configuration itself is validated on
    /// insertion into the registry, not here; this only checks that the
    /// record is structurally complete.
    pub fn to_part(&self) -> StoreResult<Part> {
        let kind = PartKind::from_label(&self.part_type).ok_or(StoreError::UnknownPartType {
            found: self.part_type.clone(),
        })?;

        let config = match kind {
            PartKind::Inlet => PartConfig::Inlet(InletConfig {
                altitude_m: self.param(kind, "altitude_m")?,
                mach: self.param(kind, "mach")?,
                mass_flow_kg_s: self.param(kind, "mass_flow_kg_s")?,
                entrance_area_m2: self.param(kind, "entrance_area_m2")?,
                face_area_m2: self.param(kind, "face_area_m2")?,
                eta: self.param(kind, "eta")?,
            }),
            PartKind::Compressor => PartConfig::Compressor(CompressorConfig {
                stages: self.count_param(kind, "stages")?,
                pressure_ratio: self.param(kind, "pressure_ratio")?,
                eta: self.param(kind, "eta")?,
            }),
            PartKind::Combustor => PartConfig::Combustor(CombustorConfig {
                throttle: self.param(kind, "throttle")?,
                nominal_velocity_m_s: self.param(kind, "nominal_velocity_m_s")?,
                pressure_loss: self.param(kind, "pressure_loss")?,
                max_fuel_fraction: self.param(kind, "max_fuel_fraction")?,
                min_fuel_fraction: self.param(kind, "min_fuel_fraction")?,
            }),
            PartKind::Turbine => PartConfig::Turbine(TurbineConfig {
                stages: self.count_param(kind, "stages")?,
                eta: self.param(kind, "eta")?,
                mechanical_loss: self.param(kind, "mechanical_loss")?,
            }),
        };

        Ok(Part {
            id: self.id,
            name: self.name.clone(),
            config,
            upstream: self.upstream,
        })
    }

    fn param(&self, kind: PartKind, key: &'static str) -> StoreResult<f64> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .ok_or(StoreError::MissingParam {
                part_type: kind.label(),
                key,
            })
    }

    /// An integer-valued parameter (stage counts).
    fn count_param(&self, kind: PartKind, key: &'static str) -> StoreResult<u32> {
        let value = self.param(kind, key)?;
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX)
        {
            return Err(StoreError::InvalidParam { key, value });
        }
        Ok(value as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_part() -> Part {
        Part {
            id: PartId::new(),
            name: "hp compressor".to_string(),
            config: PartConfig::Compressor(CompressorConfig::new(9, 10.0, 0.85).unwrap()),
            upstream: Some(PartId::new()),
        }
    }

    #[test]
    fn record_round_trip() {
        let part = sample_part();
        let record = PartRecord::from_part(&part);
        assert_eq!(record.part_type, "Compressor");
        assert_eq!(record.params[0], ("stages".to_string(), 9.0));

        let back = record.to_part().unwrap();
        assert_eq!(back, part);
    }

    #[test]
    fn all_kinds_round_trip() {
        let parts = [
            Part {
                id: PartId::new(),
                name: "intake".to_string(),
                config: PartConfig::Inlet(
                    InletConfig::new(10_000.0, 0.8, 50.0, 1.0, 0.8, 0.95).unwrap(),
                ),
                upstream: None,
            },
            sample_part(),
            Part {
                id: PartId::new(),
                name: "burner".to_string(),
                config: PartConfig::Combustor(
                    CombustorConfig::new(0.7, 120.0, 0.04, 0.8, 0.2).unwrap(),
                ),
                upstream: Some(PartId::new()),
            },
            Part {
                id: PartId::new(),
                name: "turbine".to_string(),
                config: PartConfig::Turbine(TurbineConfig::new(2, 0.9, 0.95).unwrap()),
                upstream: Some(PartId::new()),
            },
        ];

        for part in parts {
            let back = PartRecord::from_part(&part).to_part().unwrap();
            assert_eq!(back, part);
        }
    }

    #[test]
    fn unknown_part_type_rejected() {
        let mut record = PartRecord::from_part(&sample_part());
        record.part_type = "Afterburner".to_string();
        assert!(matches!(
            record.to_part(),
            Err(StoreError::UnknownPartType { .. })
        ));
    }

    #[test]
    fn missing_parameter_rejected() {
        let mut record = PartRecord::from_part(&sample_part());
        record.params.retain(|(k, _)| k != "eta");
        assert!(matches!(
            record.to_part(),
            Err(StoreError::MissingParam { key: "eta", .. })
        ));
    }

    #[test]
    fn fractional_stage_count_rejected() {
        let mut record = PartRecord::from_part(&sample_part());
        for (k, v) in &mut record.params {
            if k == "stages" {
                *v = 8.5;
            }
        }
        assert!(matches!(
            record.to_part(),
            Err(StoreError::InvalidParam { key: "stages", .. })
        ));
    }
}
