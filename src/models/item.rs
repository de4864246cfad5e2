use serde::Deserialize;

/// Authoritative item record as returned by item.get.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ItemRecord {
    #[serde(rename = "itemid")]
    pub item_id: String,
    pub name: String,
    #[serde(rename = "key_")]
    pub key: String,
}

/// One raw history sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub clock: i64,
    pub value: f64,
}
