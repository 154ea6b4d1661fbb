use ferrous_visits_domain::{DomainError, ResetOutcome};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::VisitorRepository;

pub struct ResetVisitorsUseCase {
    visitor_repo: Arc<dyn VisitorRepository>,
}

impl ResetVisitorsUseCase {
    pub fn new(visitor_repo: Arc<dyn VisitorRepository>) -> Self {
        Self { visitor_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<ResetOutcome, DomainError> {
        let outcome = self.visitor_repo.reset_all().await?;

        if !outcome.compacted {
            warn!("Visitor table purged but storage was not reclaimed");
        }
        info!(deleted = outcome.deleted, "Visitor records reset");

        Ok(outcome)
    }
}
