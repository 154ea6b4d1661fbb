use ferrous_visits_domain::client_address::resolve;
use ferrous_visits_domain::RequestOrigin;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::services::DenylistGuard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub address: String,
}

/// Use case: answer "may this caller see the site"
pub struct CheckAccessUseCase {
    guard: Arc<DenylistGuard>,
    trust_private_networks: bool,
}

impl CheckAccessUseCase {
    pub fn new(guard: Arc<DenylistGuard>, trust_private_networks: bool) -> Self {
        Self {
            guard,
            trust_private_networks,
        }
    }

    #[instrument(skip(self, origin))]
    pub async fn execute(&self, origin: &RequestOrigin) -> AccessDecision {
        let resolved = resolve(origin);

        if resolved.is_private() && self.trust_private_networks {
            debug!(address = %resolved.address, "Private network caller, skipping denylist");
            return AccessDecision {
                allowed: true,
                address: resolved.address,
            };
        }

        let denied = self.guard.is_denied(&resolved.address).await;
        if denied {
            info!(address = %resolved.address, "Access denied by denylist");
        }

        AccessDecision {
            allowed: !denied,
            address: resolved.address,
        }
    }
}
