//! Cross-part smoke tests: a full stage sequence computed by hand.

use jc_gas::IdealGasModel;
use jc_parts::{
    CombustorConfig, CompressorConfig, InletConfig, PartConfig, PartModel, StageContext,
    TurbineConfig,
};

#[test]
fn full_stage_sequence_by_hand() {
    let model = IdealGasModel::new();

    let inlet = InletConfig::new(10_000.0, 0.8, 50.0, 1.0, 0.8, 0.95)
        .unwrap()
        .compute(&StageContext::root(), &model)
        .unwrap();

    let compressor = CompressorConfig::new(9, 10.0, 0.85)
        .unwrap()
        .compute(&StageContext::with_upstream(&inlet.state), &model)
        .unwrap();
    let work = compressor
        .summary
        .get("specific_work_j_per_kg")
        .unwrap();

    let combustor = CombustorConfig::new(0.7, 120.0, 0.04, 0.8, 0.2)
        .unwrap()
        .compute(&StageContext::with_upstream(&compressor.state), &model)
        .unwrap();

    let turbine = TurbineConfig::new(2, 0.9, 0.95)
        .unwrap()
        .compute(
            &StageContext::with_upstream(&combustor.state).compressor_work(work),
            &model,
        )
        .unwrap();

    // Pressures: rise through the compressor, bleed in the combustor, drop
    // through the turbine.
    let p0 = inlet.state.pressure().value;
    let p1 = compressor.state.pressure().value;
    let p2 = combustor.state.pressure().value;
    let p3 = turbine.state.pressure().value;
    assert_eq!(p1, p0 * 10.0);
    assert_eq!(p2, p1 * 0.96);
    assert!(p3 < p2);

    // Temperatures: compression and combustion heat, expansion cools.
    assert!(compressor.state.temperature().value > inlet.state.temperature().value);
    assert!(combustor.state.temperature().value > compressor.state.temperature().value);
    assert!(turbine.state.temperature().value < combustor.state.temperature().value);

    // Every stage produced a plottable path.
    for output in [&inlet, &compressor, &combustor, &turbine] {
        assert!(output.path.len() >= 2);
    }
}

#[test]
fn config_round_trip_reproduces_compute_output() {
    let model = IdealGasModel::new();

    let original = PartConfig::Inlet(
        InletConfig::new(10_000.0, 0.8, 50.0, 1.0, 0.8, 0.95).unwrap(),
    );
    let json = serde_json::to_string(&original).unwrap();
    let reloaded: PartConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(original, reloaded);

    let a = original.compute(&StageContext::root(), &model).unwrap();
    let b = reloaded.compute(&StageContext::root(), &model).unwrap();

    // Determinism: identical configs produce bit-identical outputs.
    assert_eq!(a.state, b.state);
    assert_eq!(a.path, b.path);
    assert_eq!(a.summary, b.summary);
}

#[test]
fn compute_is_idempotent() {
    let model = IdealGasModel::new();
    let config = CompressorConfig::new(9, 10.0, 0.85).unwrap();

    let inlet = InletConfig::new(10_000.0, 0.8, 50.0, 1.0, 0.8, 0.95)
        .unwrap()
        .compute(&StageContext::root(), &model)
        .unwrap();

    let ctx = StageContext::with_upstream(&inlet.state);
    let first = config.compute(&ctx, &model).unwrap();
    let second = config.compute(&ctx, &model).unwrap();
    assert_eq!(first.state, second.state);
    assert_eq!(first.path, second.path);
}
