//! Ferrous Visits Infrastructure Layer
pub mod database;
pub mod repositories;
pub mod system;
