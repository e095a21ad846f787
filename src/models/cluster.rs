use serde::{Deserialize, Serialize};

/// Seed entity for the cluster wizard. A fresh wizard starts from an empty
/// entity; editing flows seed it from the stored cluster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterEntity {
    pub name: String,
    #[serde(default)]
    pub spec: ClusterSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterSpec {
    #[serde(default)]
    pub version: String,
}

/// One entry of the master-version catalog served by the platform API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterVersion {
    pub version: String,
    #[serde(default)]
    pub default: bool,
    #[serde(rename = "allowedNodeVersions", default)]
    pub allowed_node_versions: Vec<String>,
}
