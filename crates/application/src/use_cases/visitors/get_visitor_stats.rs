use ferrous_visits_domain::VisitorStats;
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::ports::VisitorRepository;

/// Use case: total count, latest visit and the full ordered list.
/// Each half degrades on its own, so this never fails.
pub struct GetVisitorStatsUseCase {
    visitor_repo: Arc<dyn VisitorRepository>,
}

impl GetVisitorStatsUseCase {
    pub fn new(visitor_repo: Arc<dyn VisitorRepository>) -> Self {
        Self { visitor_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> VisitorStats {
        let total_count = self.visitor_repo.count().await.unwrap_or_else(|e| {
            error!(error = %e, "Failed to count visitors");
            0
        });

        let records = self.visitor_repo.list_all().await.unwrap_or_else(|e| {
            error!(error = %e, "Failed to list visitors");
            Vec::new()
        });

        debug!(total_count, listed = records.len(), "Visitor stats collected");
        VisitorStats::new(total_count, records)
    }
}
