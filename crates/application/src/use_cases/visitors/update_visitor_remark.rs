use ferrous_visits_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::VisitorRepository;

pub struct UpdateVisitorRemarkUseCase {
    visitor_repo: Arc<dyn VisitorRepository>,
}

impl UpdateVisitorRemarkUseCase {
    pub fn new(visitor_repo: Arc<dyn VisitorRepository>) -> Self {
        Self { visitor_repo }
    }

    /// A missing remark clears the annotation.
    #[instrument(skip(self, remark))]
    pub async fn execute(&self, id: i64, remark: Option<String>) -> Result<(), DomainError> {
        let remark = remark.unwrap_or_default();

        if !self.visitor_repo.update_remark(id, &remark).await? {
            return Err(DomainError::VisitorNotFound(id));
        }

        debug!(visitor_id = id, remark_len = remark.len(), "Visitor remark updated");
        Ok(())
    }
}
