use serde::{Deserialize, Serialize};

/// Administrator record as returned by the platform settings endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub name: String,
    pub email: String,
    #[serde(rename = "isGlobalViewer", default)]
    pub is_global_viewer: bool,
}

/// Payload for promoting a user into the admin or global-viewer group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUpdate {
    pub email: String,
    #[serde(rename = "isGlobalViewer")]
    pub is_global_viewer: bool,
}
