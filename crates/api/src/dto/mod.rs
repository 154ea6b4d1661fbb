pub mod access;
pub mod denylist;
pub mod status;
pub mod visitor;

pub use access::VerifyIpResponse;
pub use denylist::{
    DenylistFailureResponse, DenylistResponse, SaveDenylistRequest, SaveDenylistResponse,
};
pub use status::{ApiDescriptor, ServiceStatusResponse};
pub use visitor::{
    BatchDeleteRequest, BatchDeleteResponse, EditVisitorRequest, MessageResponse,
    RecordVisitResponse, VisitRecordResponse, VisitorDataResponse,
};
