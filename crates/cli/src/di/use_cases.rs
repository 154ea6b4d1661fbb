use super::Repositories;
use ferrous_visits_api::{AccessUseCases, AppState, DenylistUseCases, VisitorUseCases};
use ferrous_visits_application::services::DenylistGuard;
use ferrous_visits_application::use_cases::{
    BatchDeleteVisitorsUseCase, CheckAccessUseCase, DeleteVisitorUseCase, GetDenylistUseCase,
    GetVisitorStatsUseCase, RecordVisitUseCase, ResetVisitorsUseCase, SaveDenylistUseCase,
    UpdateVisitorRemarkUseCase,
};
use ferrous_visits_domain::AccessConfig;
use std::sync::Arc;

pub struct UseCases {
    pub check_access: Arc<CheckAccessUseCase>,
    pub record_visit: Arc<RecordVisitUseCase>,
    pub get_stats: Arc<GetVisitorStatsUseCase>,
    pub delete_visitor: Arc<DeleteVisitorUseCase>,
    pub batch_delete: Arc<BatchDeleteVisitorsUseCase>,
    pub update_remark: Arc<UpdateVisitorRemarkUseCase>,
    pub reset_visitors: Arc<ResetVisitorsUseCase>,
    pub get_denylist: Arc<GetDenylistUseCase>,
    pub save_denylist: Arc<SaveDenylistUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, access: &AccessConfig) -> Self {
        let guard = Arc::new(DenylistGuard::new(
            repos.denylist.clone(),
            repos.clock.clone(),
            access.fail_open_on_error,
        ));

        Self {
            check_access: Arc::new(CheckAccessUseCase::new(
                guard.clone(),
                access.trust_private_networks,
            )),
            record_visit: Arc::new(RecordVisitUseCase::new(
                repos.visitor.clone(),
                guard.clone(),
                repos.clock.clone(),
            )),
            get_stats: Arc::new(GetVisitorStatsUseCase::new(repos.visitor.clone())),
            delete_visitor: Arc::new(DeleteVisitorUseCase::new(repos.visitor.clone())),
            batch_delete: Arc::new(BatchDeleteVisitorsUseCase::new(repos.visitor.clone())),
            update_remark: Arc::new(UpdateVisitorRemarkUseCase::new(repos.visitor.clone())),
            reset_visitors: Arc::new(ResetVisitorsUseCase::new(repos.visitor.clone())),
            get_denylist: Arc::new(GetDenylistUseCase::new(guard.clone())),
            save_denylist: Arc::new(SaveDenylistUseCase::new(guard)),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            access: AccessUseCases {
                check_access: self.check_access,
            },
            visitors: VisitorUseCases {
                record_visit: self.record_visit,
                get_stats: self.get_stats,
                delete_visitor: self.delete_visitor,
                batch_delete: self.batch_delete,
                update_remark: self.update_remark,
                reset: self.reset_visitors,
            },
            denylist: DenylistUseCases {
                get_denylist: self.get_denylist,
                save_denylist: self.save_denylist,
            },
        }
    }
}
