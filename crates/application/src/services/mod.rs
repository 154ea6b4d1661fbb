pub mod denylist_guard;

pub use denylist_guard::DenylistGuard;
