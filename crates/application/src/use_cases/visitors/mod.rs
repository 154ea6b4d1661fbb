pub mod batch_delete_visitors;
pub mod delete_visitor;
pub mod get_visitor_stats;
pub mod record_visit;
pub mod reset_visitors;
pub mod update_visitor_remark;

pub use batch_delete_visitors::BatchDeleteVisitorsUseCase;
pub use delete_visitor::DeleteVisitorUseCase;
pub use get_visitor_stats::GetVisitorStatsUseCase;
pub use record_visit::RecordVisitUseCase;
pub use reset_visitors::ResetVisitorsUseCase;
pub use update_visitor_remark::UpdateVisitorRemarkUseCase;
