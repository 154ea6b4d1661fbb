use ferrous_visits_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::VisitorRepository;

pub struct DeleteVisitorUseCase {
    visitor_repo: Arc<dyn VisitorRepository>,
}

impl DeleteVisitorUseCase {
    pub fn new(visitor_repo: Arc<dyn VisitorRepository>) -> Self {
        Self { visitor_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if !self.visitor_repo.delete(id).await? {
            return Err(DomainError::VisitorNotFound(id));
        }

        info!(visitor_id = id, "Visitor record deleted");
        Ok(())
    }
}
