#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use ferrous_visits_application::ports::{Clock, DenylistRepository, VisitorRepository};
use ferrous_visits_domain::{
    DenylistEntry, DenylistItemFailure, DomainError, ResetOutcome, VisitRecord,
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// 2024-05-01 02:03:04 UTC, i.e. 10:03:04 at UTC+8.
    pub fn default_instant() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 5, 1, 2, 3, 4).unwrap())
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone)]
pub struct MockVisitorRepository {
    records: Arc<RwLock<Vec<VisitRecord>>>,
    next_id: Arc<RwLock<i64>>,
    should_fail: Arc<RwLock<bool>>,
    compaction_fails: Arc<RwLock<bool>>,
}

impl MockVisitorRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            should_fail: Arc::new(RwLock::new(false)),
            compaction_fails: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_records(records: Vec<(&str, &str)>) -> Self {
        let repo = Self::new();
        for (address, visit_time) in records {
            repo.insert(address, visit_time).await.unwrap();
        }
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn set_compaction_fails(&self, fails: bool) {
        *self.compaction_fails.write().await = fails;
    }

    pub async fn count_records(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn get_all_records(&self) -> Vec<VisitRecord> {
        self.records.read().await.clone()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("Mock storage failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockVisitorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisitorRepository for MockVisitorRepository {
    async fn insert(&self, address: &str, visit_time: &str) -> Result<VisitRecord, DomainError> {
        self.check_failure().await?;

        let mut next_id = self.next_id.write().await;
        let record = VisitRecord {
            id: *next_id,
            address: address.to_string(),
            visit_time: visit_time.to_string(),
            remark: String::new(),
        };
        *next_id += 1;

        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_failure().await?;
        Ok(self.records.read().await.len() as u64)
    }

    async fn list_all(&self) -> Result<Vec<VisitRecord>, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.visit_time.cmp(&a.visit_time).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, DomainError> {
        self.check_failure().await?;
        let ids: HashSet<i64> = ids.iter().copied().collect();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !ids.contains(&r.id));
        Ok((before - records.len()) as u64)
    }

    async fn update_remark(&self, id: i64, remark: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.remark = remark.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reset_all(&self) -> Result<ResetOutcome, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        let deleted = records.len() as u64;
        records.clear();
        Ok(ResetOutcome {
            deleted,
            compacted: !*self.compaction_fails.read().await,
        })
    }
}

#[derive(Clone)]
pub struct MockDenylistRepository {
    entries: Arc<RwLock<Vec<DenylistEntry>>>,
    should_fail: Arc<RwLock<bool>>,
    rejected: Arc<RwLock<HashSet<String>>>,
}

impl MockDenylistRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
            rejected: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub fn with_denied_addresses(addresses: Vec<&str>) -> Self {
        let entries = addresses
            .into_iter()
            .map(|a| DenylistEntry {
                id: None,
                address: a.to_string(),
                created_at: None,
            })
            .collect();

        Self {
            entries: Arc::new(RwLock::new(entries)),
            should_fail: Arc::new(RwLock::new(false)),
            rejected: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Makes `insert_all` report a per-item failure for `address`.
    pub async fn reject_address(&self, address: &str) {
        self.rejected.write().await.insert(address.to_string());
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("Mock storage failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockDenylistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DenylistRepository for MockDenylistRepository {
    async fn get_all(&self) -> Result<Vec<DenylistEntry>, DomainError> {
        self.check_failure().await?;
        Ok(self.entries.read().await.clone())
    }

    async fn is_denied(&self, address: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        Ok(self.entries.read().await.iter().any(|e| e.address == address))
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        self.check_failure().await?;
        let mut entries = self.entries.write().await;
        let removed = entries.len() as u64;
        entries.clear();
        Ok(removed)
    }

    async fn insert_all(
        &self,
        addresses: &[String],
        created_at: &str,
    ) -> Result<(u64, Vec<DenylistItemFailure>), DomainError> {
        self.check_failure().await?;
        let rejected = self.rejected.read().await;
        let mut entries = self.entries.write().await;
        let mut saved = 0;
        let mut failures = Vec::new();

        for address in addresses {
            if rejected.contains(address) {
                failures.push(DenylistItemFailure {
                    address: address.clone(),
                    reason: "Mock insert failure".to_string(),
                });
                continue;
            }
            if entries.iter().any(|e| &e.address == address) {
                continue;
            }
            let next_id = entries.len() as i64 + 1;
            entries.push(DenylistEntry {
                id: Some(next_id),
                address: address.clone(),
                created_at: Some(created_at.to_string()),
            });
            saved += 1;
        }

        Ok((saved, failures))
    }
}
