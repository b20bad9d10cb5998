use serde::Deserialize;

/// Body of POST /api/v1/session.
///
/// Field casing follows the existing client payload (`Role`/`Id`
/// capitalized). Every field is optional and unvalidated: missing strings
/// default to empty, a missing id to zero.
#[derive(Debug, Deserialize)]
pub struct SetSessionRequest {
    #[serde(rename = "Role", default)]
    pub role: String,

    #[serde(rename = "Id", default)]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}
