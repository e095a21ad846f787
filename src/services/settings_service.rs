use crate::api::{api_call, ApiError};
use crate::models::{Admin, AdminUpdate};

/// Promote (or demote) a user through the platform settings endpoint and
/// hand back the resolved administrator record.
pub async fn set_admin(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    update: AdminUpdate,
) -> Result<Admin, ApiError> {
    let body = serde_json::to_value(&update)
        .map_err(|e| ApiError::Shape(format!("admin payload: {}", e)))?;
    let payload = api_call(client, api_base_url, api_token, "PUT", "/admin", Some(body)).await?;
    serde_json::from_value(payload).map_err(|e| ApiError::Shape(format!("admin record: {}", e)))
}

pub async fn list_admins(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Result<Vec<Admin>, ApiError> {
    let payload = api_call(client, api_base_url, api_token, "GET", "/admin", None).await?;
    serde_json::from_value(payload).map_err(|e| ApiError::Shape(format!("admin list: {}", e)))
}
