/// Report column order; header text matches the production report exactly.
pub const DATA_COLUMNS: [&str; 6] = ["Server", "Type", "unit measurements", "Min", "Avg", "Max"];

/// One output row: host display name, metric display name, unit, min/avg/max.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub server: String,
    pub metric: String,
    pub unit: &'static str,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}
