use async_trait::async_trait;
use ferrous_visits_application::ports::VisitorRepository;
use ferrous_visits_domain::{DomainError, ResetOutcome, VisitRecord};
use sqlx::SqlitePool;
use tracing::{error, info, instrument, warn};

// SQLite caps bound parameters per statement at 999 on older builds.
const IDS_PER_CHUNK: usize = 500;

type VisitRow = (i64, String, String, String);

pub struct SqliteVisitorRepository {
    pool: SqlitePool,
}

impl SqliteVisitorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: VisitRow) -> VisitRecord {
        let (id, address, visit_time, remark) = row;
        VisitRecord {
            id,
            address,
            visit_time,
            remark,
        }
    }
}

fn build_delete_sql(n: usize) -> String {
    debug_assert!(n > 0 && n <= IDS_PER_CHUNK);
    const HEADER: &str = "DELETE FROM visitors WHERE id IN (";
    let mut sql = String::with_capacity(HEADER.len() + n * 2 + 1);
    sql.push_str(HEADER);
    for i in 0..n {
        if i > 0 {
            sql.push(',');
        }
        sql.push('?');
    }
    sql.push(')');
    sql
}

#[async_trait]
impl VisitorRepository for SqliteVisitorRepository {
    #[instrument(skip(self))]
    async fn insert(&self, address: &str, visit_time: &str) -> Result<VisitRecord, DomainError> {
        let row = sqlx::query_as::<_, VisitRow>(
            "INSERT INTO visitors (ip, visit_time, remark)
             VALUES (?, ?, '')
             RETURNING id, ip, visit_time, remark",
        )
        .bind(address)
        .bind(visit_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert visitor");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::row_to_record(row))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM visitors")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count visitors");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<VisitRecord>, DomainError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            "SELECT id, ip, visit_time, remark
             FROM visitors
             ORDER BY visit_time DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list visitors");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM visitors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, id, "Failed to delete visitor");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction for batch delete");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut deleted = 0u64;
        for chunk in ids.chunks(IDS_PER_CHUNK) {
            let sql = build_delete_sql(chunk.len());
            let mut q = sqlx::query(&sql);
            for id in chunk {
                q = q.bind(*id);
            }

            let result = q.execute(&mut *tx).await.map_err(|e| {
                error!(error = %e, "Failed to batch delete visitors");
                DomainError::DatabaseError(e.to_string())
            })?;
            deleted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit batch delete transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(deleted)
    }

    #[instrument(skip(self, remark))]
    async fn update_remark(&self, id: i64, remark: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE visitors SET remark = ? WHERE id = ?")
            .bind(remark)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, id, "Failed to update visitor remark");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn reset_all(&self) -> Result<ResetOutcome, DomainError> {
        let result = sqlx::query("DELETE FROM visitors")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to purge visitors");
                DomainError::DatabaseError(e.to_string())
            })?;
        let deleted = result.rows_affected();

        // VACUUM cannot run inside a transaction and may fail while readers
        // hold the file; the purge already succeeded at this point.
        let compacted = match sqlx::query("VACUUM").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "VACUUM after visitor purge failed");
                false
            }
        };

        info!(deleted, compacted, "Visitor table purged");
        Ok(ResetOutcome { deleted, compacted })
    }
}
