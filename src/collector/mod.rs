// Per-host collection: resolve well-known items, fetch working-hour history
// window by window, reduce to daily and total aggregates.

pub mod aggregation;

use tracing::{debug, info};

use crate::models::{DailyAggregate, ItemRecord, MetricSummary, Sample, TimeWindow};
use crate::zabbix_repo::{HistoryClass, ZabbixError, ZabbixRepo};

/// Well-known metric key substrings collected from every host, matched
/// against the keys of the host's enabled items.
pub const METRIC_KEYS: [&str; 5] = [
    "system.cpu.util",
    "vm.memory.util",
    r#"perf_counter_en["\PhysicalDisk(0 C:)\% Idle Time",60]"#,
    "net.if.in",
    "net.if.out",
];

/// Collect one host's metric summaries over the given windows. A host with no
/// matching items yields an empty vec; an unknown host name is an error.
pub async fn collect_host_metrics(
    repo: &ZabbixRepo,
    host_name: &str,
    windows: &[TimeWindow],
) -> Result<Vec<MetricSummary>, ZabbixError> {
    let (host_id, host) = repo.host_id(host_name).await?;
    debug!(host = %host, host_id = %host_id, "resolved host");

    let keys = matching_keys(&repo.enabled_items(&host_id).await?);

    // Re-query each surviving key for the authoritative item record.
    let mut items = Vec::with_capacity(keys.len());
    for key in &keys {
        if let Some(item) = repo.item_by_key(&host_id, key).await? {
            items.push(item);
        }
    }
    if items.is_empty() {
        info!(host = %host_name, "no well-known metrics on host");
        return Ok(Vec::new());
    }

    let mut summaries = Vec::with_capacity(items.len());
    for item in items {
        let class = HistoryClass::for_key(&item.key);
        let mut all_values: Vec<f64> = Vec::new();
        let mut daily = Vec::new();
        for window in windows {
            let samples = repo
                .history(&item.item_id, class, window.time_from, window.time_till)
                .await?;
            debug!(
                key = %item.key,
                date = %window.date,
                from = %window.readable_utc_start,
                samples = samples.len(),
                "window fetched"
            );
            let values = values_of(&samples);
            if let Some(stats) = aggregation::aggregate_values(&values) {
                daily.push(DailyAggregate { date: window.date, stats });
            }
            all_values.extend(values);
        }
        let total = aggregation::aggregate_values(&all_values);
        summaries.push(MetricSummary {
            host_name: host_name.to_string(),
            item,
            daily,
            total,
        });
    }
    Ok(summaries)
}

/// Keys of enabled items containing any well-known substring.
fn matching_keys(items: &[ItemRecord]) -> Vec<String> {
    items
        .iter()
        .filter(|item| METRIC_KEYS.iter().any(|k| item.key.contains(k)))
        .map(|item| item.key.clone())
        .collect()
}

fn values_of(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.value).collect()
}
