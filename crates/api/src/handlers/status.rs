use axum::response::Json;
use ferrous_visits_domain::visit_time::visit_time_now;

use crate::dto::{ApiDescriptor, ServiceStatusResponse};

const AVAILABLE_APIS: &[ApiDescriptor] = &[
    ApiDescriptor {
        path: "/api/verify-ip",
        method: "GET",
        desc: "Check whether the calling address may access the site",
    },
    ApiDescriptor {
        path: "/api/record-visitor",
        method: "POST",
        desc: "Record a visit from the calling address",
    },
    ApiDescriptor {
        path: "/api/get-visitor-data",
        method: "GET",
        desc: "Visitor count, latest visit time and the full visit list",
    },
    ApiDescriptor {
        path: "/api/delete-visitor/{id}",
        method: "DELETE",
        desc: "Delete one visit record",
    },
    ApiDescriptor {
        path: "/api/batch-delete-visitor",
        method: "DELETE",
        desc: "Delete several visit records by id",
    },
    ApiDescriptor {
        path: "/api/edit-visitor/{id}",
        method: "PUT",
        desc: "Set the remark of a visit record",
    },
    ApiDescriptor {
        path: "/api/get-blacklist",
        method: "GET",
        desc: "List denylisted addresses",
    },
    ApiDescriptor {
        path: "/api/save-blacklist",
        method: "POST",
        desc: "Replace the denylist",
    },
    ApiDescriptor {
        path: "/api/reset-visitor",
        method: "DELETE",
        desc: "Delete every visit record",
    },
];

pub async fn service_status() -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        success: true,
        message: "Ferrous Visits visitor tracking service is running",
        service_time: visit_time_now(),
        available_apis: AVAILABLE_APIS,
    })
}
