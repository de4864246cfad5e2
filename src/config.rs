use std::fmt;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub zabbix: ZabbixConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZabbixConfig {
    pub server_url: String,
    pub username: String,
    /// May be left empty in the file and supplied via ZABBIX_PASSWORD.
    #[serde(default)]
    pub password: Secret,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Visible host names exactly as shown in Zabbix.
    pub host_names: Vec<String>,
    #[serde(default = "default_days_back")]
    pub days_back: u32,
    /// IANA zone the working hours are anchored in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_days_back() -> u32 {
    31
}

fn default_timezone() -> String {
    "Asia/Yekaterinburg".into()
}

fn default_output_path() -> String {
    "/tmp/server_metrics.xlsx".into()
}

/// Credential wrapper whose Debug never reveals the value.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Secret(s)
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
        let mut config: AppConfig = toml::from_str(&s)?;
        if let Ok(password) = std::env::var("ZABBIX_PASSWORD")
            && !password.is_empty()
        {
            config.zabbix.password = password.into();
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Working-hours timezone; validated at load time.
    pub fn timezone(&self) -> anyhow::Result<chrono_tz::Tz> {
        self.report
            .timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|e| anyhow::anyhow!("report.timezone: {e}"))
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.zabbix.server_url.is_empty(),
            "zabbix.server_url must be non-empty"
        );
        anyhow::ensure!(
            !self.zabbix.username.is_empty(),
            "zabbix.username must be non-empty"
        );
        anyhow::ensure!(
            !self.zabbix.password.is_empty(),
            "zabbix.password must be set (in the file or via ZABBIX_PASSWORD)"
        );
        anyhow::ensure!(
            !self.report.host_names.is_empty(),
            "report.host_names must list at least one host"
        );
        anyhow::ensure!(
            self.report.days_back <= 365,
            "report.days_back must be <= 365, got {}",
            self.report.days_back
        );
        anyhow::ensure!(
            !self.report.output_path.is_empty(),
            "report.output_path must be non-empty"
        );
        self.timezone()?;
        Ok(())
    }
}
