pub mod dto;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use extractors::{ClientOrigin, SocketPeer};
pub use routes::{create_api_routes, create_app};
pub use state::{AccessUseCases, AppState, DenylistUseCases, VisitorUseCases};
