use ferrous_visits_domain::{VisitRecord, VisitorStats};
use serde::{Deserialize, Serialize};

pub const RESTRICTED_REASON: &str = "restricted";

/// Plain `{success, msg}` acknowledgement.
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub success: bool,
    pub msg: String,
}

impl MessageResponse {
    pub fn ok(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            msg: msg.into(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecordVisitResponse {
    pub success: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl RecordVisitResponse {
    pub fn recorded(address: String, visit_time: String) -> Self {
        Self {
            success: true,
            msg: "Visit recorded".to_string(),
            visitor_ip: Some(address),
            visit_time: Some(visit_time),
            reason: None,
        }
    }

    pub fn restricted() -> Self {
        Self {
            success: false,
            msg: "Access from this address is restricted".to_string(),
            visitor_ip: None,
            visit_time: None,
            reason: Some(RESTRICTED_REASON),
        }
    }
}

/// Row shape of `ipList`; field names are part of the wire contract.
#[derive(Serialize, Debug, Clone)]
pub struct VisitRecordResponse {
    pub id: i64,
    pub ip: String,
    pub visit_time: String,
    pub remark: String,
}

impl From<VisitRecord> for VisitRecordResponse {
    fn from(record: VisitRecord) -> Self {
        Self {
            id: record.id,
            ip: record.address,
            visit_time: record.visit_time,
            remark: record.remark,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VisitorDataResponse {
    pub success: bool,
    pub total_count: u64,
    pub last_visit: String,
    pub ip_list: Vec<VisitRecordResponse>,
}

impl From<VisitorStats> for VisitorDataResponse {
    fn from(stats: VisitorStats) -> Self {
        Self {
            success: true,
            total_count: stats.total_count,
            last_visit: stats.last_visit,
            ip_list: stats.records.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct BatchDeleteRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
}

#[derive(Serialize, Debug)]
pub struct BatchDeleteResponse {
    pub success: bool,
    pub msg: String,
    pub deleted: u64,
}

impl BatchDeleteResponse {
    pub fn failed(msg: String) -> Self {
        Self {
            success: false,
            msg,
            deleted: 0,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct EditVisitorRequest {
    #[serde(default)]
    pub remark: Option<String>,
}
