use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIpResponse {
    pub success: bool,
    pub allow_access: bool,
}
