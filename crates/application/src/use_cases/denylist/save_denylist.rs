use ferrous_visits_domain::{DenylistReplaceReport, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::services::DenylistGuard;

pub struct SaveDenylistUseCase {
    guard: Arc<DenylistGuard>,
}

impl SaveDenylistUseCase {
    pub fn new(guard: Arc<DenylistGuard>) -> Self {
        Self { guard }
    }

    /// Replaces the whole denylist with `addresses`.
    #[instrument(skip(self, addresses), fields(submitted = addresses.len()))]
    pub async fn execute(&self, addresses: &[String]) -> Result<DenylistReplaceReport, DomainError> {
        self.guard.replace_all(addresses).await
    }
}
