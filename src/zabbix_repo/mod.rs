// Zabbix JSON-RPC API access via reqwest.
// Thin wrapper over the five calls the pipeline needs. No retries at any
// layer: a failed request aborts the whole run.

mod rpc;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::models::{ItemRecord, Sample};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error)]
pub enum ZabbixError {
    #[error("host '{0}' not found")]
    HostNotFound(String),
    #[error("{method} failed: {message} {data} (code {code})")]
    Api {
        method: &'static str,
        code: i64,
        message: String,
        data: String,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method}: unexpected reply: {reason}")]
    UnexpectedReply {
        method: &'static str,
        reason: String,
    },
}

/// Typed history table selector. Network counters live in the unsigned table
/// (type 3), everything else in the float table (type 0); querying the wrong
/// table returns no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryClass {
    Float,
    Unsigned,
}

impl HistoryClass {
    pub fn for_key(key: &str) -> Self {
        if key.contains("net.if.") {
            HistoryClass::Unsigned
        } else {
            HistoryClass::Float
        }
    }

    fn api_value(self) -> u8 {
        match self {
            HistoryClass::Float => 0,
            HistoryClass::Unsigned => 3,
        }
    }
}

#[derive(Debug)]
pub struct ZabbixRepo {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    next_id: AtomicU64,
}

impl ZabbixRepo {
    /// Build the HTTP client, normalize the endpoint URL, and log in. The
    /// session token is sent as a Bearer header on all subsequent calls.
    pub async fn connect(
        server_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, ZabbixError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let mut repo = Self {
            http,
            endpoint: api_endpoint(server_url),
            token: String::new(),
            next_id: AtomicU64::new(1),
        };

        let result = repo
            .call(
                "user.login",
                json!({"username": username, "password": password}),
            )
            .await?;
        let token = result.as_str().ok_or(ZabbixError::UnexpectedReply {
            method: "user.login",
            reason: "token is not a string".into(),
        })?;
        repo.token = token.to_string();
        Ok(repo)
    }

    /// Resolve a visible host name to `(hostid, technical name)`.
    pub async fn host_id(&self, host_name: &str) -> Result<(String, String), ZabbixError> {
        let result = self
            .call(
                "host.get",
                json!({
                    "filter": {"name": host_name},
                    "output": ["hostid", "host"],
                }),
            )
            .await?;
        let hosts: Vec<rpc::HostRecord> = parse("host.get", result)?;
        match hosts.into_iter().next() {
            Some(h) => Ok((h.host_id, h.host)),
            None => Err(ZabbixError::HostNotFound(host_name.to_string())),
        }
    }

    /// All enabled items on a host, wildcard search on.
    pub async fn enabled_items(&self, host_id: &str) -> Result<Vec<ItemRecord>, ZabbixError> {
        let result = self
            .call(
                "item.get",
                json!({
                    "hostids": host_id,
                    "output": ["itemid", "name", "key_", "units"],
                    "searchWildcardsEnabled": true,
                    "filter": {"status": 0},
                }),
            )
            .await?;
        parse("item.get", result)
    }

    /// Authoritative item record for a key search; None when nothing matches.
    pub async fn item_by_key(
        &self,
        host_id: &str,
        key: &str,
    ) -> Result<Option<ItemRecord>, ZabbixError> {
        let result = self
            .call(
                "item.get",
                json!({
                    "hostids": host_id,
                    "search": {"key_": key},
                    "output": ["itemid", "name", "key_"],
                }),
            )
            .await?;
        let items: Vec<ItemRecord> = parse("item.get", result)?;
        Ok(items.into_iter().next())
    }

    /// Raw samples for an item strictly within `[time_from, time_till]`,
    /// ordered by clock descending.
    pub async fn history(
        &self,
        item_id: &str,
        class: HistoryClass,
        time_from: i64,
        time_till: i64,
    ) -> Result<Vec<Sample>, ZabbixError> {
        let result = self
            .call(
                "history.get",
                json!({
                    "itemids": item_id,
                    "time_from": time_from,
                    "time_till": time_till,
                    "output": ["clock", "value"],
                    "history": class.api_value(),
                    "sortfield": "clock",
                    "sortorder": "DESC",
                }),
            )
            .await?;
        let records: Vec<rpc::HistoryRecord> = parse("history.get", result)?;
        records
            .into_iter()
            .map(|r| {
                let clock = r.clock.parse::<i64>();
                let value = r.value.parse::<f64>();
                match (clock, value) {
                    (Ok(clock), Ok(value)) => Ok(Sample { clock, value }),
                    _ => Err(ZabbixError::UnexpectedReply {
                        method: "history.get",
                        reason: format!("unparsable sample clock={} value={}", r.clock, r.value),
                    }),
                }
            })
            .collect()
    }

    /// Best-effort session teardown; a failure here never fails the run.
    pub async fn logout(&self) {
        if let Err(e) = self.call("user.logout", json!([])).await {
            debug!(error = %e, "user.logout failed");
        }
    }

    async fn call(&self, method: &'static str, params: Value) -> Result<Value, ZabbixError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": id,
        });
        // Params are never logged: user.login carries credentials.
        debug!(method, id, "api call");

        let mut request = self.http.post(&self.endpoint).json(&body);
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }
        let reply: rpc::RpcResponse = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = reply.error {
            return Err(ZabbixError::Api {
                method,
                code: err.code,
                message: err.message,
                data: err.data,
            });
        }
        reply.result.ok_or(ZabbixError::UnexpectedReply {
            method,
            reason: "missing result".into(),
        })
    }
}

/// Deserialize a JSON-RPC result into the expected record shape.
fn parse<T: DeserializeOwned>(method: &'static str, result: Value) -> Result<T, ZabbixError> {
    serde_json::from_value(result).map_err(|e| ZabbixError::UnexpectedReply {
        method,
        reason: e.to_string(),
    })
}

/// Normalize a configured server URL to the JSON-RPC endpoint: default the
/// scheme to https and append `api_jsonrpc.php` unless already present.
fn api_endpoint(server_url: &str) -> String {
    let mut url = if server_url.contains("://") {
        server_url.to_string()
    } else {
        format!("https://{server_url}")
    };
    if !url.ends_with("api_jsonrpc.php") {
        while url.ends_with('/') {
            url.pop();
        }
        url.push_str("/api_jsonrpc.php");
    }
    url
}
