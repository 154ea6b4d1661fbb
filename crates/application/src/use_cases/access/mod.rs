pub mod check_access;

pub use check_access::{AccessDecision, CheckAccessUseCase};
