#![allow(dead_code)]

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use ferrous_visits_api::{create_app, AccessUseCases, AppState, DenylistUseCases, VisitorUseCases};
use ferrous_visits_application::ports::Clock;
use ferrous_visits_application::services::DenylistGuard;
use ferrous_visits_application::use_cases::{
    BatchDeleteVisitorsUseCase, CheckAccessUseCase, DeleteVisitorUseCase, GetDenylistUseCase,
    GetVisitorStatsUseCase, RecordVisitUseCase, ResetVisitorsUseCase, SaveDenylistUseCase,
    UpdateVisitorRemarkUseCase,
};
use ferrous_visits_domain::AccessConfig;
use ferrous_visits_infrastructure::database::run_migrations;
use ferrous_visits_infrastructure::repositories::{
    SqliteDenylistRepository, SqliteVisitorRepository,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;

/// Timestamp every visit recorded through [`create_test_app`] carries.
pub const FIXED_VISIT_TIME: &str = "2024-05-01 10:03:04";

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct TestApp {
    pub app: Router,
    pub visitors_pool: SqlitePool,
    pub denylist_pool: SqlitePool,
}

pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn create_test_app() -> TestApp {
    let pool = create_test_db().await;
    build_app(pool.clone(), pool, AccessConfig::default())
}

/// Visitors and denylist on separate databases so either can be broken alone.
pub async fn create_split_test_app(access: AccessConfig) -> TestApp {
    build_app(create_test_db().await, create_test_db().await, access)
}

fn build_app(visitors_pool: SqlitePool, denylist_pool: SqlitePool, access: AccessConfig) -> TestApp {
    let visitor_repo = Arc::new(SqliteVisitorRepository::new(visitors_pool.clone()));
    let denylist_repo = Arc::new(SqliteDenylistRepository::new(denylist_pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 5, 1, 2, 3, 4).unwrap(),
    ));

    let guard = Arc::new(DenylistGuard::new(
        denylist_repo,
        clock.clone(),
        access.fail_open_on_error,
    ));

    let state = AppState {
        access: AccessUseCases {
            check_access: Arc::new(CheckAccessUseCase::new(
                guard.clone(),
                access.trust_private_networks,
            )),
        },
        visitors: VisitorUseCases {
            record_visit: Arc::new(RecordVisitUseCase::new(
                visitor_repo.clone(),
                guard.clone(),
                clock,
            )),
            get_stats: Arc::new(GetVisitorStatsUseCase::new(visitor_repo.clone())),
            delete_visitor: Arc::new(DeleteVisitorUseCase::new(visitor_repo.clone())),
            batch_delete: Arc::new(BatchDeleteVisitorsUseCase::new(visitor_repo.clone())),
            update_remark: Arc::new(UpdateVisitorRemarkUseCase::new(visitor_repo.clone())),
            reset: Arc::new(ResetVisitorsUseCase::new(visitor_repo)),
        },
        denylist: DenylistUseCases {
            get_denylist: Arc::new(GetDenylistUseCase::new(guard.clone())),
            save_denylist: Arc::new(SaveDenylistUseCase::new(guard)),
        },
    };

    TestApp {
        app: create_app(state),
        visitors_pool,
        denylist_pool,
    }
}

pub fn peer(ip: &str) -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::new(ip.parse().unwrap(), 54321))
}

pub fn request(method: &str, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .extension(peer("203.0.113.7"))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    request(method, uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    request(method, uri).body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
