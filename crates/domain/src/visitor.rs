/// Stored when no address source was present on the request.
pub const UNKNOWN_ADDRESS: &str = "unknown-public-address (fallback)";

/// Stored in place of any private or loopback address.
pub const INTERNAL_ADDRESS: &str = "internal address (not a real visitor)";

/// Reported as `last_visit` while the visitor table is empty.
pub const NO_RECORD: &str = "no visitor records yet";

/// A single recorded site visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub id: i64,
    pub address: String,
    pub visit_time: String,
    pub remark: String,
}

/// Aggregate view served by the statistics endpoint.
#[derive(Debug, Clone, Default)]
pub struct VisitorStats {
    pub total_count: u64,
    pub last_visit: String,
    pub records: Vec<VisitRecord>,
}

impl VisitorStats {
    /// Builds the stats view; `last_visit` falls back to [`NO_RECORD`]
    /// when `records` is empty. `records` must already be newest-first.
    pub fn new(total_count: u64, records: Vec<VisitRecord>) -> Self {
        let last_visit = records
            .first()
            .map(|r| r.visit_time.clone())
            .unwrap_or_else(|| NO_RECORD.to_string());

        Self {
            total_count,
            last_visit,
            records,
        }
    }
}

/// Result of a successful visitor purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOutcome {
    pub deleted: u64,
    /// False when the reclamation pass after the delete failed.
    pub compacted: bool,
}

/// Result of a visit recording attempt that reached a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    Recorded { address: String, visit_time: String },
    Restricted { address: String },
}

impl VisitOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, VisitOutcome::Recorded { .. })
    }
}
