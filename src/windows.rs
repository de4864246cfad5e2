// Working-hour windows: local 09:00-18:00 per calendar day, converted to UTC
// epoch seconds. Timezone-aware via chrono-tz (fixed offsets would drift
// across DST). Ambiguous local times resolve to the earliest mapping.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::models::TimeWindow;

const WORK_START_HOUR: u32 = 9;
const WORK_END_HOUR: u32 = 18;

/// Windows for `days_back + 1` days walking backward from today's anchor in `tz`.
pub fn working_hour_windows(tz: Tz, days_back: u32) -> Vec<TimeWindow> {
    windows_from(tz, Utc::now(), days_back)
}

/// Anchor-injectable variant: `now` is converted into `tz` to pick the anchor
/// day. Before local 09:00 the anchor shifts back one day so a day that has
/// not begun yet produces no window.
pub fn windows_from(tz: Tz, now: DateTime<Utc>, days_back: u32) -> Vec<TimeWindow> {
    let now_local = now.with_timezone(&tz);
    let mut anchor = now_local.date_naive();
    if now_local.hour() < WORK_START_HOUR {
        anchor -= Duration::days(1);
    }

    let mut out = Vec::with_capacity(days_back as usize + 1);
    for i in 0..=days_back {
        let date = anchor - Duration::days(i as i64);
        match day_window(tz, date) {
            Some(window) => out.push(window),
            // A zone would have to skip 09:00 or 18:00 entirely for this to
            // fire; real DST transitions happen in the small hours.
            None => warn!(%date, %tz, "working-hour bound does not exist; skipping day"),
        }
    }
    out
}

fn day_window(tz: Tz, date: NaiveDate) -> Option<TimeWindow> {
    let start_utc = local_at(tz, date, WORK_START_HOUR)?.with_timezone(&Utc);
    let end_utc = local_at(tz, date, WORK_END_HOUR)?.with_timezone(&Utc);
    Some(TimeWindow {
        date,
        time_from: start_utc.timestamp(),
        time_till: end_utc.timestamp(),
        readable_utc_start: start_utc.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    })
}

/// Local wall-clock `hour`:00:00 on `date` in `tz`.
fn local_at(tz: Tz, date: NaiveDate, hour: u32) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    tz.from_local_datetime(&naive).earliest()
}
