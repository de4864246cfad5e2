use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use zabbix_metrics::*;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    let tz = app_config.timezone()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        hosts = app_config.report.host_names.len(),
        days_back = app_config.report.days_back,
        timezone = %tz,
        "starting report run"
    );

    let windows = windows::working_hour_windows(tz, app_config.report.days_back);

    let repo = zabbix_repo::ZabbixRepo::connect(
        &app_config.zabbix.server_url,
        &app_config.zabbix.username,
        app_config.zabbix.password.expose(),
    )
    .await
    .context("connecting to Zabbix")?;

    let mut rows = Vec::new();
    for host_name in &app_config.report.host_names {
        let summaries = collector::collect_host_metrics(&repo, host_name, &windows)
            .await
            .with_context(|| format!("collecting metrics for '{host_name}'"))?;
        let host_rows = report::to_rows(&summaries);
        tracing::info!(host = %host_name, rows = host_rows.len(), "host collected");
        rows.extend(host_rows);
    }
    repo.logout().await;

    let output_path = std::path::Path::new(&app_config.report.output_path);
    report::write_xlsx(output_path, &rows)?;
    tracing::info!(path = %output_path.display(), rows = rows.len(), "report written");

    Ok(())
}
