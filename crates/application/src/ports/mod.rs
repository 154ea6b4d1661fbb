mod clock;
mod denylist_repository;
mod visitor_repository;

pub use clock::Clock;
pub use denylist_repository::DenylistRepository;
pub use visitor_repository::VisitorRepository;
