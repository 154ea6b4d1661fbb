use ferrous_visits_domain::DomainError;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::VisitorRepository;

pub struct BatchDeleteVisitorsUseCase {
    visitor_repo: Arc<dyn VisitorRepository>,
}

impl BatchDeleteVisitorsUseCase {
    pub fn new(visitor_repo: Arc<dyn VisitorRepository>) -> Self {
        Self { visitor_repo }
    }

    /// Returns the number of rows removed. Ids that match nothing are
    /// ignored; an empty id set is rejected before touching storage.
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn execute(&self, ids: &[i64]) -> Result<u64, DomainError> {
        let unique: Vec<i64> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        if unique.is_empty() {
            return Err(DomainError::InvalidInput(
                "At least one visitor id is required".to_string(),
            ));
        }

        let deleted = self.visitor_repo.delete_many(&unique).await?;

        info!(requested = unique.len(), deleted, "Visitor records batch deleted");
        Ok(deleted)
    }
}
