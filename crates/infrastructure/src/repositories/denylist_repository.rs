use async_trait::async_trait;
use ferrous_visits_application::ports::DenylistRepository;
use ferrous_visits_domain::{DenylistEntry, DenylistItemFailure, DomainError};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

type DenylistRow = (i64, String, String);

/// Denylist backed by the `blacklist` table. Lookups always hit storage so
/// a replace is visible to the next request without any cache to refresh.
pub struct SqliteDenylistRepository {
    pool: SqlitePool,
}

impl SqliteDenylistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DenylistRepository for SqliteDenylistRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<DenylistEntry>, DomainError> {
        let rows = sqlx::query_as::<_, DenylistRow>(
            "SELECT id, ip, create_time FROM blacklist ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch denylist");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|(id, address, created_at)| DenylistEntry {
                id: Some(id),
                address,
                created_at: Some(created_at),
            })
            .collect())
    }

    async fn is_denied(&self, address: &str) -> Result<bool, DomainError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM blacklist WHERE ip = ? LIMIT 1")
            .bind(address)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row.is_some())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM blacklist")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to clear denylist");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }

    /// Inserts each address on its own so one bad row does not sink the
    /// rest. Duplicates are ignored and not counted as saved.
    #[instrument(skip(self, addresses), fields(count = addresses.len()))]
    async fn insert_all(
        &self,
        addresses: &[String],
        created_at: &str,
    ) -> Result<(u64, Vec<DenylistItemFailure>), DomainError> {
        let mut saved = 0u64;
        let mut failures = Vec::new();

        for address in addresses {
            let result = sqlx::query("INSERT OR IGNORE INTO blacklist (ip, create_time) VALUES (?, ?)")
                .bind(address)
                .bind(created_at)
                .execute(&self.pool)
                .await;

            match result {
                Ok(r) if r.rows_affected() > 0 => saved += 1,
                Ok(_) => debug!(address = %address, "Duplicate denylist entry ignored"),
                Err(e) => {
                    debug!(error = %e, address = %address, "Denylist insert rejected");
                    failures.push(DenylistItemFailure {
                        address: address.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok((saved, failures))
    }
}
