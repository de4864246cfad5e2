use chrono::NaiveDate;

/// Working-hour window for one calendar day, bounds in UTC epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub date: NaiveDate,
    pub time_from: i64,
    pub time_till: i64,
    /// Window start rendered as "YYYY-MM-DD HH:MM:SS UTC" (for logs).
    pub readable_utc_start: String,
}
