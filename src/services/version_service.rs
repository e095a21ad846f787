use crate::api::{api_call, ApiError};
use crate::models::MasterVersion;

/// Fetch the master-version catalog for the cluster wizard.
pub async fn get_master_versions(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Result<Vec<MasterVersion>, ApiError> {
    let payload = api_call(
        client,
        api_base_url,
        api_token,
        "GET",
        "/upgrades/cluster",
        None,
    )
    .await?;
    serde_json::from_value(payload).map_err(|e| ApiError::Shape(format!("version list: {}", e)))
}
