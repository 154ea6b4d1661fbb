pub mod access;
pub mod denylist;
pub mod visitors;

// Re-export use cases
pub use access::{AccessDecision, CheckAccessUseCase};
pub use denylist::{GetDenylistUseCase, SaveDenylistUseCase};
pub use visitors::{
    BatchDeleteVisitorsUseCase, DeleteVisitorUseCase, GetVisitorStatsUseCase,
    RecordVisitUseCase, ResetVisitorsUseCase, UpdateVisitorRemarkUseCase,
};
