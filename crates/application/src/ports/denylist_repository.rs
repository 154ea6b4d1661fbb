use async_trait::async_trait;
use ferrous_visits_domain::{DenylistEntry, DenylistItemFailure, DomainError};

#[async_trait]
pub trait DenylistRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<DenylistEntry>, DomainError>;

    async fn is_denied(&self, address: &str) -> Result<bool, DomainError>;

    /// Remove every entry. Returns the number of rows removed.
    async fn clear(&self) -> Result<u64, DomainError>;

    /// Insert-or-ignore each address independently. Returns how many rows
    /// were written plus the addresses that failed.
    async fn insert_all(
        &self,
        addresses: &[String],
        created_at: &str,
    ) -> Result<(u64, Vec<DenylistItemFailure>), DomainError>;
}
