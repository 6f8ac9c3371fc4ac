// 構築 → 計測 → レポート の一連の流れのテスト
use dispatch_bench::benchmarks::{measure, DYNAMIC_DISPATCH_LABEL};
use dispatch_bench::factories::{DynamicCollection, DynamicShapeFactory};
use dispatch_bench::{core::TestingConfig, DispatchBenchmark, Shape, Variant};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_one_shape_per_bucket_scenario() {
    let draws = [0.1, 0.3, 0.5, 0.7, 0.9];
    let collection = DynamicCollection::from_draws(&DynamicShapeFactory, &draws).unwrap();

    let variants: Vec<Variant> = collection.iter().map(|s| s.variant()).collect();
    assert_eq!(
        variants,
        vec![Variant::A, Variant::B, Variant::C, Variant::D, Variant::E]
    );

    let report = measure(DYNAMIC_DISPATCH_LABEL, &collection);
    assert!((report.sum - 2.5).abs() < 1e-9);

    let output = report.to_string();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "n = 5 ");
    assert!(lines[1].starts_with("dynamic dispatch : "));
    assert!(lines[1].contains(" us per iteration ("));
    assert!(lines[1].contains(" ms total) "));
    assert!(lines[1].ends_with("[2.500000]"));
}

#[test]
fn test_empty_collection_still_reports_both_lines() {
    let collection = DynamicCollection::from_draws(&DynamicShapeFactory, &[]).unwrap();
    let report = measure(DYNAMIC_DISPATCH_LABEL, &collection);

    assert_eq!(report.sum, 0.0);
    assert_eq!(report.average_us_per_iteration(), 0.0);

    let output = report.to_string();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "n = 0 ");
    assert!(lines[1].starts_with("dynamic dispatch : 0.000000 us per iteration ("));
    assert!(lines[1].ends_with("[0.000000]"));
}

#[test]
fn test_repeated_measurement_gives_same_sum() {
    let mut rng = StdRng::seed_from_u64(123);
    let collection = DynamicCollection::generate_dynamic(10_000, &mut rng).unwrap();

    let first = measure(DYNAMIC_DISPATCH_LABEL, &collection);
    let second = measure(DYNAMIC_DISPATCH_LABEL, &collection);
    assert_eq!(first.sum.to_bits(), second.sum.to_bits());
    assert_eq!(first.element_count, second.element_count);
}

#[test]
fn test_dynamic_and_static_runs_agree_for_same_seed() {
    let benchmark = DispatchBenchmark::<TestingConfig>::new();

    let dynamic = benchmark
        .run_dynamic(&mut StdRng::seed_from_u64(77))
        .unwrap();
    let fixed = benchmark
        .run_static(&mut StdRng::seed_from_u64(77))
        .unwrap();

    assert_eq!(dynamic.element_count, fixed.element_count);
    assert_eq!(dynamic.sum.to_bits(), fixed.sum.to_bits());
}
