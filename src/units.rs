// Name-pattern unit classification. The patterns reproduce the Zabbix item
// names in production, capitalization included, since they drive both the
// unit label and the bits/sec -> Mbps conversion.

use once_cell::sync::Lazy;
use regex::Regex;

static BITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Bits (received|sent)").expect("valid pattern"));
static UTIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(Disk|CPU|Memory) utilization").expect("valid pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Mbps,
    Percent,
    Count,
}

impl Unit {
    /// Unit column text for the report.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Mbps => "Mbps",
            Unit::Percent => "%",
            Unit::Count => "count",
        }
    }

    /// Classify a metric by its display name.
    pub fn for_metric_name(name: &str) -> Self {
        if BITS_RE.is_match(name) {
            Unit::Mbps
        } else if UTIL_RE.is_match(name) {
            Unit::Percent
        } else {
            Unit::Count
        }
    }

    /// Network throughput is stored in bits/sec and reported in Mbps; other
    /// units pass values through unchanged.
    pub fn convert(self, value: f64) -> f64 {
        match self {
            Unit::Mbps => bps_to_mbps(value),
            Unit::Percent | Unit::Count => value,
        }
    }
}

pub fn bps_to_mbps(bps: f64) -> f64 {
    bps / 1_000_000.0
}
