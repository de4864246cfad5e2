// Shared test helpers

use zabbix_metrics::models::*;

pub fn item(id: &str, name: &str, key: &str) -> ItemRecord {
    ItemRecord {
        item_id: id.to_string(),
        name: name.to_string(),
        key: key.to_string(),
    }
}

pub fn agg(min: f64, avg: f64, max: f64, sample_count: usize) -> Aggregate {
    Aggregate {
        min,
        avg,
        max,
        sample_count,
    }
}

pub fn summary(
    host: &str,
    name: &str,
    key: &str,
    total: Option<Aggregate>,
) -> MetricSummary {
    MetricSummary {
        host_name: host.to_string(),
        item: item("1", name, key),
        daily: vec![],
        total,
    }
}
