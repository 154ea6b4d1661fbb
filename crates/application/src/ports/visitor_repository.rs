use async_trait::async_trait;
use ferrous_visits_domain::{DomainError, ResetOutcome, VisitRecord};

#[async_trait]
pub trait VisitorRepository: Send + Sync {
    /// Insert a single visit row and return it with its assigned id
    async fn insert(&self, address: &str, visit_time: &str) -> Result<VisitRecord, DomainError>;

    /// Total number of stored visits
    async fn count(&self) -> Result<u64, DomainError>;

    /// All visits, newest first (ties broken by descending id)
    async fn list_all(&self) -> Result<Vec<VisitRecord>, DomainError>;

    /// Delete one visit; `false` when no row had that id
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Delete every listed visit in one all-or-nothing operation.
    /// Returns how many rows were actually removed.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, DomainError>;

    /// Replace a visit's remark; `false` when no row had that id
    async fn update_remark(&self, id: i64, remark: &str) -> Result<bool, DomainError>;

    /// Delete every visit, then reclaim storage on a best-effort basis
    async fn reset_all(&self) -> Result<ResetOutcome, DomainError>;
}
