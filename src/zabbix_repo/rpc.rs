// JSON-RPC 2.0 envelope and record types for the Zabbix API.
// Zabbix returns numeric fields as strings; parsing happens in the repo.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct HostRecord {
    #[serde(rename = "hostid")]
    pub host_id: String,
    pub host: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryRecord {
    pub clock: String,
    pub value: String,
}
