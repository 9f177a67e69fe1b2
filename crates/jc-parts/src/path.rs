//! Process paths: sampled traces of a part's internal transformation.

use crate::error::{PartError, PartResult};
use jc_core::numeric::lerp;
use jc_core::units::{k, pa};
use jc_gas::{Composition, GasError, GasModel};
use serde::{Deserialize, Serialize};

/// Nominal number of render samples generated across one part's
/// transformation. Parts with internal stages distribute this budget over
/// their stages, keeping stage boundaries exact; the count is a fixed
/// discretization chosen to render a smooth curve, not a tuning knob.
pub const PATH_RESOLUTION: usize = 32;

/// One sampled point along a transformation.
///
/// Entropy and temperature are the plotted coordinates of the T-s diagram;
/// the pressure at the sample is retained so the diagram assembler can place
/// isobar overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    /// Specific entropy [J/(kg·K)]
    pub entropy: f64,
    /// Temperature [K]
    pub temperature: f64,
    /// Pressure [Pa]
    pub pressure: f64,
}

/// Ordered, non-empty sequence of samples tracing one part's transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessPath {
    samples: Vec<PathSample>,
}

impl ProcessPath {
    /// Wrap a sample sequence, rejecting empty or non-finite data.
    pub fn from_samples(samples: Vec<PathSample>) -> PartResult<Self> {
        if samples.is_empty() {
            return Err(PartError::InvalidState(GasError::InvalidArg {
                what: "process path must contain at least one sample",
            }));
        }
        for sample in &samples {
            if !sample.entropy.is_finite()
                || !sample.temperature.is_finite()
                || !sample.pressure.is_finite()
            {
                return Err(PartError::InvalidState(GasError::NonPhysical {
                    what: "non-finite process path sample",
                }));
            }
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[PathSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sample (the upstream end of the transformation).
    pub fn first(&self) -> PathSample {
        self.samples[0]
    }

    /// Last sample (the part's outlet).
    pub fn last(&self) -> PathSample {
        self.samples[self.samples.len() - 1]
    }
}

/// Sample the gas model at (T, p), yielding one path point.
pub fn sample_at(
    model: &dyn GasModel,
    comp: &Composition,
    t_k: f64,
    p_pa: f64,
) -> PartResult<PathSample> {
    let props = model.properties(k(t_k), pa(p_pa), comp)?;
    Ok(PathSample {
        entropy: props.entropy,
        temperature: t_k,
        pressure: p_pa,
    })
}

/// Append `count` samples tracing one leg of a transformation.
///
/// Temperature is interpolated linearly and pressure geometrically between
/// the endpoint states; entropy comes from the gas model at each sample.
/// The starting point is included only when `include_start` is set, so
/// consecutive legs share their boundary sample exactly once.
pub fn sample_leg(
    out: &mut Vec<PathSample>,
    model: &dyn GasModel,
    comp: &Composition,
    from: (f64, f64),
    to: (f64, f64),
    count: usize,
    include_start: bool,
) -> PartResult<()> {
    let (t0, p0) = from;
    let (t1, p1) = to;
    let steps = count.max(1);
    let start = if include_start { 0 } else { 1 };
    for i in start..=steps {
        let frac = i as f64 / steps as f64;
        let t = lerp(t0, t1, frac);
        let p = p0 * (p1 / p0).powf(frac);
        out.push(sample_at(model, comp, t, p)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_gas::IdealGasModel;

    fn sample(s: f64, t: f64, p: f64) -> PathSample {
        PathSample {
            entropy: s,
            temperature: t,
            pressure: p,
        }
    }

    #[test]
    fn rejects_empty_path() {
        assert!(ProcessPath::from_samples(vec![]).is_err());
    }

    #[test]
    fn rejects_non_finite_sample() {
        let result =
            ProcessPath::from_samples(vec![sample(f64::NAN, 300.0, 101_325.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn endpoints() {
        let path = ProcessPath::from_samples(vec![
            sample(6800.0, 288.0, 101_325.0),
            sample(6820.0, 330.0, 150_000.0),
            sample(6850.0, 400.0, 250_000.0),
        ])
        .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first().temperature, 288.0);
        assert_eq!(path.last().pressure, 250_000.0);
    }

    #[test]
    fn sample_leg_hits_exact_endpoints() {
        let model = IdealGasModel::new();
        let air = Composition::air();
        let mut samples = Vec::new();
        sample_leg(
            &mut samples,
            &model,
            &air,
            (288.0, 101_325.0),
            (400.0, 250_000.0),
            8,
            true,
        )
        .unwrap();

        assert_eq!(samples.len(), 9);
        assert_eq!(samples[0].temperature, 288.0);
        assert_eq!(samples[0].pressure, 101_325.0);
        assert_eq!(samples[8].temperature, 400.0);
        assert!((samples[8].pressure - 250_000.0).abs() < 1e-6);
    }

    #[test]
    fn sample_leg_without_start_skips_boundary() {
        let model = IdealGasModel::new();
        let air = Composition::air();
        let mut samples = Vec::new();
        sample_leg(
            &mut samples,
            &model,
            &air,
            (288.0, 101_325.0),
            (400.0, 250_000.0),
            4,
            false,
        )
        .unwrap();
        assert_eq!(samples.len(), 4);
        assert!(samples[0].temperature > 288.0);
    }
}
