use ferrous_visits_domain::{DenylistItemFailure, DenylistReplaceReport};
use serde::{Deserialize, Serialize};

/// `blacklist` is always present; it is empty when storage could not be read.
#[derive(Serialize, Debug)]
pub struct DenylistResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub blacklist: Vec<String>,
}

impl DenylistResponse {
    pub fn unavailable(msg: String) -> Self {
        Self {
            success: false,
            msg: Some(msg),
            blacklist: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct SaveDenylistRequest {
    pub blacklist: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct DenylistFailureResponse {
    pub ip: String,
    pub error: String,
}

impl From<DenylistItemFailure> for DenylistFailureResponse {
    fn from(failure: DenylistItemFailure) -> Self {
        Self {
            ip: failure.address,
            error: failure.reason,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SaveDenylistResponse {
    pub success: bool,
    pub msg: String,
    pub saved: u64,
    pub failed: Vec<DenylistFailureResponse>,
}

impl SaveDenylistResponse {
    pub fn failed(msg: String) -> Self {
        Self {
            success: false,
            msg,
            saved: 0,
            failed: Vec::new(),
        }
    }
}

impl From<DenylistReplaceReport> for SaveDenylistResponse {
    fn from(report: DenylistReplaceReport) -> Self {
        let complete = report.is_complete();
        let msg = if complete {
            format!("Denylist saved ({} entries)", report.saved)
        } else {
            format!(
                "Denylist saved with {} failed entries",
                report.failures.len()
            )
        };

        Self {
            success: complete,
            msg,
            saved: report.saved,
            failed: report.failures.into_iter().map(Into::into).collect(),
        }
    }
}
