pub mod access;
pub mod denylist;
pub mod status;
pub mod visitors;
