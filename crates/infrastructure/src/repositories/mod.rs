pub mod denylist_repository;
pub mod visitor_repository;

pub use denylist_repository::SqliteDenylistRepository;
pub use visitor_repository::SqliteVisitorRepository;
