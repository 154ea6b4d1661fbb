use ferrous_visits_domain::client_address::resolve;
use ferrous_visits_domain::visit_time::format_visit_time;
use ferrous_visits_domain::{DomainError, RequestOrigin, VisitOutcome};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::ports::{Clock, VisitorRepository};
use crate::services::DenylistGuard;

/// Use case: record one site visit for the calling address
pub struct RecordVisitUseCase {
    visitor_repo: Arc<dyn VisitorRepository>,
    guard: Arc<DenylistGuard>,
    clock: Arc<dyn Clock>,
}

impl RecordVisitUseCase {
    pub fn new(
        visitor_repo: Arc<dyn VisitorRepository>,
        guard: Arc<DenylistGuard>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            visitor_repo,
            guard,
            clock,
        }
    }

    /// The denylist is checked against the address that would be stored,
    /// so private callers are checked as the internal-address sentinel.
    #[instrument(skip(self, origin))]
    pub async fn execute(&self, origin: &RequestOrigin) -> Result<VisitOutcome, DomainError> {
        let resolved = resolve(origin);
        let address = resolved.storable().to_string();

        if self.guard.is_denied(&address).await {
            info!(address = %address, "Visit from denylisted address not recorded");
            return Ok(VisitOutcome::Restricted { address });
        }

        let visit_time = format_visit_time(self.clock.now_utc());

        let record = self
            .visitor_repo
            .insert(&address, &visit_time)
            .await
            .map_err(|e| {
                error!(error = %e, address = %address, "Failed to record visit");
                e
            })?;

        info!(id = record.id, address = %record.address, "Visit recorded");

        Ok(VisitOutcome::Recorded {
            address: record.address,
            visit_time: record.visit_time,
        })
    }
}
