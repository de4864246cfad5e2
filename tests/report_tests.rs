// Report tests: row assembly (gating + unit conversion) and xlsx output

mod common;

use common::{agg, summary};
use zabbix_metrics::models::ReportRow;
use zabbix_metrics::report::{to_rows, write_xlsx};

#[test]
fn metric_without_total_produces_no_row() {
    let summaries = vec![summary("host-a", "CPU utilization", "system.cpu.util", None)];
    assert!(to_rows(&summaries).is_empty());
}

#[test]
fn cpu_utilization_row() {
    let summaries = vec![summary(
        "KDC (192.168.8.3)",
        "CPU utilization",
        "system.cpu.util",
        Some(agg(10.0, 15.5, 20.0, 40)),
    )];
    let rows = to_rows(&summaries);
    assert_eq!(
        rows,
        vec![ReportRow {
            server: "KDC (192.168.8.3)".to_string(),
            metric: "CPU utilization".to_string(),
            unit: "%",
            min: 10.0,
            avg: 15.5,
            max: 20.0,
        }]
    );
}

#[test]
fn network_row_converted_to_mbps() {
    let summaries = vec![summary(
        "KDC (192.168.8.3)",
        "Interface eth0: Bits received",
        "net.if.in[eth0]",
        Some(agg(18_000_000.0, 25_300_000.0, 31_500_000.0, 120)),
    )];
    let rows = to_rows(&summaries);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].unit, "Mbps");
    assert_eq!(rows[0].min, 18.0);
    assert_eq!(rows[0].avg, 25.3);
    assert_eq!(rows[0].max, 31.5);
}

#[test]
fn unknown_metric_gets_count_unit_unconverted() {
    let summaries = vec![summary(
        "host-a",
        "Context switches per second",
        "system.cpu.switches",
        Some(agg(100.0, 250.5, 900.0, 7)),
    )];
    let rows = to_rows(&summaries);
    assert_eq!(rows[0].unit, "count");
    assert_eq!(rows[0].avg, 250.5);
}

#[test]
fn row_order_follows_summary_order() {
    let summaries = vec![
        summary("a", "CPU utilization", "system.cpu.util", Some(agg(1.0, 2.0, 3.0, 2))),
        summary("a", "Memory utilization", "vm.memory.util", None),
        summary("b", "Memory utilization", "vm.memory.util", Some(agg(4.0, 5.0, 6.0, 2))),
    ];
    let rows = to_rows(&summaries);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].server, "a");
    assert_eq!(rows[1].server, "b");
}

#[test]
fn writes_workbook_creating_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports/2025/server_metrics.xlsx");
    let rows = to_rows(&[summary(
        "host-a",
        "CPU utilization",
        "system.cpu.util",
        Some(agg(10.0, 15.5, 20.0, 40)),
    )]);
    write_xlsx(&path, &rows).expect("write_xlsx");
    let meta = std::fs::metadata(&path).expect("report file exists");
    assert!(meta.len() > 0);
}

#[test]
fn empty_rows_still_writes_header_only_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server_metrics.xlsx");
    write_xlsx(&path, &[]).expect("write_xlsx");
    let meta = std::fs::metadata(&path).expect("report file exists");
    assert!(meta.len() > 0);
}
