use ferrous_visits_domain::denylist::normalize_denylist;
use ferrous_visits_domain::visit_time::format_visit_time;
use ferrous_visits_domain::{DenylistEntry, DenylistReplaceReport, DomainError};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{Clock, DenylistRepository};

/// Gatekeeper in front of the denylist store.
///
/// `replace_all` clears the table before reinserting, so a concurrent
/// `is_denied` may observe an empty or partially written set. Replacements
/// are rare administrative operations and this window is accepted.
pub struct DenylistGuard {
    denylist_repo: Arc<dyn DenylistRepository>,
    clock: Arc<dyn Clock>,
    fail_open_on_error: bool,
}

impl DenylistGuard {
    pub fn new(
        denylist_repo: Arc<dyn DenylistRepository>,
        clock: Arc<dyn Clock>,
        fail_open_on_error: bool,
    ) -> Self {
        Self {
            denylist_repo,
            clock,
            fail_open_on_error,
        }
    }

    /// Equality lookup. A storage failure resolves to `!fail_open_on_error`.
    #[instrument(skip(self))]
    pub async fn is_denied(&self, address: &str) -> bool {
        match self.denylist_repo.is_denied(address).await {
            Ok(denied) => denied,
            Err(e) if self.fail_open_on_error => {
                warn!(error = %e, address, "Denylist lookup failed, allowing (fail-open)");
                false
            }
            Err(e) => {
                error!(error = %e, address, "Denylist lookup failed, denying (fail-closed)");
                true
            }
        }
    }

    pub async fn get_all(&self) -> Result<Vec<DenylistEntry>, DomainError> {
        self.denylist_repo.get_all().await
    }

    /// Clear, then insert-ignoring-duplicates. Per-item failures are
    /// collected in the report; the clear is never rolled back.
    #[instrument(skip(self, addresses))]
    pub async fn replace_all<I, S>(&self, addresses: I) -> Result<DenylistReplaceReport, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let addresses = normalize_denylist(addresses);
        let created_at = format_visit_time(self.clock.now_utc());

        let removed = self.denylist_repo.clear().await?;
        debug!(removed, "Denylist cleared");

        let (saved, failures) = self
            .denylist_repo
            .insert_all(&addresses, &created_at)
            .await?;

        for failure in &failures {
            warn!(address = %failure.address, reason = %failure.reason, "Denylist entry not saved");
        }

        info!(
            submitted = addresses.len(),
            saved,
            failed = failures.len(),
            "Denylist replaced"
        );

        Ok(DenylistReplaceReport { saved, failures })
    }
}
