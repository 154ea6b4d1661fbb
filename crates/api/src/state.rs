use ferrous_visits_application::use_cases::{
    BatchDeleteVisitorsUseCase, CheckAccessUseCase, DeleteVisitorUseCase, GetDenylistUseCase,
    GetVisitorStatsUseCase, RecordVisitUseCase, ResetVisitorsUseCase, SaveDenylistUseCase,
    UpdateVisitorRemarkUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub access: AccessUseCases,
    pub visitors: VisitorUseCases,
    pub denylist: DenylistUseCases,
}

#[derive(Clone)]
pub struct AccessUseCases {
    pub check_access: Arc<CheckAccessUseCase>,
}

#[derive(Clone)]
pub struct VisitorUseCases {
    pub record_visit: Arc<RecordVisitUseCase>,
    pub get_stats: Arc<GetVisitorStatsUseCase>,
    pub delete_visitor: Arc<DeleteVisitorUseCase>,
    pub batch_delete: Arc<BatchDeleteVisitorsUseCase>,
    pub update_remark: Arc<UpdateVisitorRemarkUseCase>,
    pub reset: Arc<ResetVisitorsUseCase>,
}

#[derive(Clone)]
pub struct DenylistUseCases {
    pub get_denylist: Arc<GetDenylistUseCase>,
    pub save_denylist: Arc<SaveDenylistUseCase>,
}
