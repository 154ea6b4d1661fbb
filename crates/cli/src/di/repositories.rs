use ferrous_visits_infrastructure::repositories::{
    SqliteDenylistRepository, SqliteVisitorRepository,
};
use ferrous_visits_infrastructure::system::SystemClock;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub visitor: Arc<SqliteVisitorRepository>,
    pub denylist: Arc<SqliteDenylistRepository>,
    pub clock: Arc<SystemClock>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            visitor: Arc::new(SqliteVisitorRepository::new(pool.clone())),
            denylist: Arc::new(SqliteDenylistRepository::new(pool)),
            clock: Arc::new(SystemClock),
        }
    }
}
