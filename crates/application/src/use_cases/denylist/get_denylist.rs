use ferrous_visits_domain::{DenylistEntry, DomainError};
use std::sync::Arc;

use crate::services::DenylistGuard;

pub struct GetDenylistUseCase {
    guard: Arc<DenylistGuard>,
}

impl GetDenylistUseCase {
    pub fn new(guard: Arc<DenylistGuard>) -> Self {
        Self { guard }
    }

    pub async fn execute(&self) -> Result<Vec<DenylistEntry>, DomainError> {
        self.guard.get_all().await
    }
}
