// Report assembly and xlsx serialization. Row building is pure; the writer
// creates missing parent directories and emits a header-only workbook when
// there are no rows.

use std::path::Path;

use anyhow::Context;
use rust_xlsxwriter::Workbook;

use crate::models::{DATA_COLUMNS, MetricSummary, ReportRow};
use crate::units::Unit;

/// Flatten summaries into report rows. Only metrics whose total aggregate
/// exists produce a row. Unit conversion applies to the already-rounded
/// totals, so Mbps values keep the extra precision (25,300,000 -> 25.3).
pub fn to_rows(summaries: &[MetricSummary]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for summary in summaries {
        let Some(total) = summary.total else { continue };
        let unit = Unit::for_metric_name(&summary.item.name);
        rows.push(ReportRow {
            server: summary.host_name.clone(),
            metric: summary.item.name.clone(),
            unit: unit.label(),
            min: unit.convert(total.min),
            avg: unit.convert(total.avg),
            max: unit.convert(total.max),
        });
    }
    rows
}

/// Write the report workbook at `path`, creating missing parent directories.
pub fn write_xlsx(path: &Path, rows: &[ReportRow]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in DATA_COLUMNS.iter().enumerate() {
        sheet.write(0, col as u16, *header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, row.server.as_str())?;
        sheet.write(r, 1, row.metric.as_str())?;
        sheet.write(r, 2, row.unit)?;
        sheet.write(r, 3, row.min)?;
        sheet.write(r, 4, row.avg)?;
        sheet.write(r, 5, row.max)?;
    }
    workbook
        .save(path)
        .with_context(|| format!("writing report to {}", path.display()))?;
    Ok(())
}
