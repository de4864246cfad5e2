// Aggregation tests: >=2-sample gating, order independence, one-decimal
// rounding

use zabbix_metrics::collector::aggregation::{aggregate_values, round1};

#[test]
fn empty_returns_none() {
    assert!(aggregate_values(&[]).is_none());
}

#[test]
fn single_sample_returns_none() {
    assert!(aggregate_values(&[42.0]).is_none());
}

#[test]
fn two_samples_is_enough() {
    let out = aggregate_values(&[10.0, 20.0]).unwrap();
    assert_eq!(out.min, 10.0);
    assert_eq!(out.avg, 15.0);
    assert_eq!(out.max, 20.0);
    assert_eq!(out.sample_count, 2);
}

#[test]
fn statistics_are_order_independent() {
    let mut values = vec![3.5, 1.2, 9.9, 4.4, 7.1, 0.3];
    let forward = aggregate_values(&values).unwrap();
    values.reverse();
    let backward = aggregate_values(&values).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn values_rounded_to_one_decimal() {
    let out = aggregate_values(&[1.04, 1.06]).unwrap();
    assert_eq!(out.min, 1.0);
    assert_eq!(out.avg, 1.1);
    assert_eq!(out.max, 1.1);
}

#[test]
fn forty_cpu_samples_example() {
    // 22 samples at 20.0 and 18 at 10.0: avg (440 + 180) / 40 = 15.5.
    let mut values = vec![20.0; 22];
    values.extend(vec![10.0; 18]);
    let out = aggregate_values(&values).unwrap();
    assert_eq!(out.min, 10.0);
    assert_eq!(out.avg, 15.5);
    assert_eq!(out.max, 20.0);
    assert_eq!(out.sample_count, 40);
}

#[test]
fn round1_midpoints() {
    assert_eq!(round1(25.25), 25.3);
    assert_eq!(round1(0.04), 0.0);
    assert_eq!(round1(-1.25), -1.3);
    assert_eq!(round1(25_300_000.0), 25_300_000.0);
}
