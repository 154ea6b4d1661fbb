use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy)]
pub struct ApiDescriptor {
    pub path: &'static str,
    pub method: &'static str,
    pub desc: &'static str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatusResponse {
    pub success: bool,
    pub message: &'static str,
    pub service_time: String,
    pub available_apis: &'static [ApiDescriptor],
}
