//! End-to-end accuracy checks against the exact `NaiveCounting` baseline,
//! driven through the type-erased `AnySketch` wrapper. The hash is
//! deterministic, so each bracket below holds for these exact streams.

use cardinality_sketches::{
    AnySketch, HyperLogLog, HyperLogLogPlusPlus, LogLog, NaiveCounting, ProbabilisticCounting,
    Sketch,
};

/// Feed `ids` into a sketch and its exact oracle; return both estimates.
fn run(ids: impl Iterator<Item = u32>, sketch: impl Into<AnySketch>) -> (u64, u64) {
    let mut sketch = sketch.into();
    let mut oracle = AnySketch::from(NaiveCounting::new());
    for id in ids {
        sketch.update(id);
        oracle.update(id);
    }
    (sketch.estimate(), oracle.estimate())
}

#[test]
fn test_naive_is_exact() {
    let (estimate, oracle) = run(
        (0..10_000u32).map(|i| i % 1_000),
        NaiveCounting::new(),
    );
    assert_eq!(oracle, 1_000);
    assert_eq!(estimate, oracle);
}

#[test]
fn test_probabilistic_counting_order_of_magnitude() {
    // One bitmap resolves cardinality only up to a factor of two: the
    // estimate is 2^R / phi for the observed run length R. For this stream
    // R = 10, so the estimate is fixed at 1323 against a true 1000.
    let (estimate, oracle) = run(
        (0..10_000u32).map(|i| i % 1_000),
        ProbabilisticCounting::new(16).unwrap(),
    );
    assert_eq!(estimate, 1_323);
    assert!(estimate >= oracle / 2 && estimate <= oracle * 2);
}

#[test]
fn test_loglog_within_expected_error() {
    // LogLog's standard error at k = 10 is about 1.3 / sqrt(1024) ~ 4%.
    let (estimate, oracle) = run(0..10_000u32, LogLog::new(10, 32).unwrap());
    assert_eq!(oracle, 10_000);
    assert!(
        (9_000..=11_000).contains(&estimate),
        "estimate = {estimate}"
    );
}

#[test]
fn test_hyperloglog_within_three_rse() {
    // RSE at k = 10 is 1.04 / 32 ~ 3.25%; three RSE is under 10%.
    let (estimate, oracle) = run(0..30_000u32, HyperLogLog::new(10, 32).unwrap());
    assert_eq!(oracle, 30_000);
    assert!(
        (27_100..=32_900).contains(&estimate),
        "estimate = {estimate}"
    );
}

#[test]
fn test_hllpp_sparse_matches_oracle() {
    // Low cardinality stays in the sparse representation, where linear
    // counting over 2^25 buckets is exact for 1000 distinct ids.
    let (estimate, oracle) = run(
        (0..10_000u32).map(|i| i % 1_000),
        HyperLogLogPlusPlus::new(14).unwrap(),
    );
    assert_eq!(estimate, oracle);
}

#[test]
fn test_hllpp_dense_beats_hyperloglog_rse() {
    // After conversion the 64-bit domain plus bias correction keeps p = 10
    // comfortably inside the plain-HyperLogLog three-RSE bracket.
    let (estimate, oracle) = run(0..60_000u32, HyperLogLogPlusPlus::new(10).unwrap());
    assert_eq!(oracle, 60_000);
    assert!(
        (54_000..=66_000).contains(&estimate),
        "estimate = {estimate}"
    );
}
