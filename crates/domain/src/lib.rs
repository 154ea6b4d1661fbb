//! Ferrous Visits Domain Layer
pub mod client_address;
pub mod config;
pub mod denylist;
pub mod errors;
pub mod visit_time;
pub mod visitor;

pub use client_address::{AddressClass, RequestOrigin, ResolvedAddress};
pub use config::{AccessConfig, CliOverrides, Config, ConfigError};
pub use denylist::{DenylistEntry, DenylistItemFailure, DenylistReplaceReport};
pub use errors::DomainError;
pub use visitor::{ResetOutcome, VisitOutcome, VisitRecord, VisitorStats};
