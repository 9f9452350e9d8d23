use minidns_domain::DnsRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    pub hostname: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub hostname: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

impl RecordResponse {
    pub fn from_domain(record: DnsRecord) -> Self {
        Self {
            id: record.id.unwrap_or(0),
            hostname: record.hostname,
            record_type: record.record_type.as_str().to_string(),
            value: record.value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub hostname: String,
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRecordQuery {
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
}
