//! Trace-to-diagram assembly.

use crate::data::{DiagramData, DiagramSegment, IsobarCurve, TsPoint};
use crate::error::DiagramResult;
use jc_core::units::{k, pa};
use jc_gas::{Composition, GasModel};
use jc_cycle::EngineTrace;

/// Number of sweep samples per isobar curve.
const ISOBAR_SAMPLES: usize = 64;

/// Temperature margin swept around the cycle line at each isobar level [K].
const ISOBAR_MARGIN_K: f64 = 100.0;

/// Temperature window the gas model can be swept over [K].
const SWEEP_T_MIN_K: f64 = 200.0;
const SWEEP_T_MAX_K: f64 = 3500.0;

/// Relative tolerance under which two pressure levels merge into one isobar.
const LEVEL_MERGE_REL_TOL: f64 = 1e-6;

/// Assemble the renderable T-s diagram for a computed engine trace.
///
/// Each trace segment becomes an ordered point list; isobar overlays are
/// generated at the pressure levels of the segment boundaries (deduplicated,
/// so the interface between two parts contributes one curve). Each isobar is
/// a temperature sweep around the cycle line's temperature at that level,
/// evaluated against the gas model with the segment's own composition.
pub fn build_ts_diagram(
    trace: &EngineTrace,
    model: &dyn GasModel,
) -> DiagramResult<DiagramData> {
    let mut data = DiagramData::default();

    for segment in &trace.segments {
        data.segments.push(DiagramSegment {
            part_id: segment.part_id,
            label: segment.label.clone(),
            kind: segment.kind,
            points: segment
                .path
                .samples()
                .iter()
                .map(|s| TsPoint {
                    entropy: s.entropy,
                    temperature: s.temperature,
                })
                .collect(),
        });
    }

    // Isobar levels: each segment's boundary pressures, tagged with the
    // temperature the cycle line passes through there and the gas mixture in
    // that segment.
    let mut levels: Vec<(f64, f64, Composition)> = Vec::new();
    for segment in &trace.segments {
        for sample in [segment.path.first(), segment.path.last()] {
            let duplicate = levels.iter().any(|(p, _, _)| {
                (p - sample.pressure).abs() <= LEVEL_MERGE_REL_TOL * p.max(sample.pressure)
            });
            if !duplicate {
                levels.push((
                    sample.pressure,
                    sample.temperature,
                    segment.composition.clone(),
                ));
            }
        }
    }

    for (pressure, t_anchor, composition) in levels {
        data.isobars
            .push(sweep_isobar(model, &composition, pressure, t_anchor)?);
    }

    Ok(data)
}

/// Generate one isobar by sweeping temperature at fixed pressure.
fn sweep_isobar(
    model: &dyn GasModel,
    composition: &Composition,
    pressure_pa: f64,
    t_anchor_k: f64,
) -> DiagramResult<IsobarCurve> {
    let t_lo = (t_anchor_k - ISOBAR_MARGIN_K).max(SWEEP_T_MIN_K);
    let t_hi = (t_anchor_k + ISOBAR_MARGIN_K).min(SWEEP_T_MAX_K);

    let mut points = Vec::with_capacity(ISOBAR_SAMPLES);
    for i in 0..ISOBAR_SAMPLES {
        let frac = i as f64 / (ISOBAR_SAMPLES - 1) as f64;
        let t = t_lo + (t_hi - t_lo) * frac;
        let props = model.properties(k(t), pa(pressure_pa), composition)?;
        points.push(TsPoint {
            entropy: props.entropy,
            temperature: t,
        });
    }

    Ok(IsobarCurve {
        pressure_pa,
        points,
    })
}
