pub mod debounce;

pub use debounce::Debouncer;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

/// Cloud providers the preset dialog can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gke,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gke => "gke",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProviderSettings {
    Gke {
        #[serde(rename = "serviceAccount")]
        service_account: String,
    },
}

/// The cluster step's contribution to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterBranch {
    pub name: String,
    pub version: String,
    pub valid: bool,
}

/// Typed partial update emitted by a wizard or preset step. Steps never
/// touch the session directly; the reducer below owns every merge.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    ClusterSpec {
        name: String,
        version: String,
        valid: bool,
    },
    ProviderSettings {
        provider: Provider,
        settings: ProviderSettings,
    },
    ClearProvider(Provider),
    SettingsValidity(bool),
}

/// Accumulator shared across all steps of a wizard or preset dialog.
/// Each named branch has exactly one owning step: the cluster step owns
/// `cluster`, each provider step owns its `spec.<provider>` branch, and
/// the active settings step owns the validity gate.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    cluster: Option<ClusterBranch>,
    providers: BTreeMap<Provider, ProviderSettings>,
    // Seeded false so the dialog cannot advance before the settings step
    // reports its first real status.
    settings_step_valid: bool,
}

impl WizardSession {
    pub fn new() -> Self {
        WizardSession::default()
    }

    pub fn apply(&mut self, update: SessionUpdate) {
        match update {
            SessionUpdate::ClusterSpec {
                name,
                version,
                valid,
            } => {
                self.cluster = Some(ClusterBranch {
                    name,
                    version,
                    valid,
                });
            }
            SessionUpdate::ProviderSettings { provider, settings } => {
                self.providers.insert(provider, settings);
            }
            SessionUpdate::ClearProvider(provider) => {
                self.providers.remove(&provider);
            }
            SessionUpdate::SettingsValidity(valid) => {
                self.settings_step_valid = valid;
            }
        }
    }

    pub fn cluster(&self) -> Option<&ClusterBranch> {
        self.cluster.as_ref()
    }

    pub fn provider(&self, provider: Provider) -> Option<&ProviderSettings> {
        self.providers.get(&provider)
    }

    pub fn has_provider(&self, provider: Provider) -> bool {
        self.providers.contains_key(&provider)
    }

    pub fn settings_step_valid(&self) -> bool {
        self.settings_step_valid
    }

    /// Aggregate readiness for submission: the cluster branch must exist
    /// and be valid, and when any provider branch is present the settings
    /// step must have reported valid.
    pub fn is_ready(&self) -> bool {
        let cluster_ok = self.cluster.as_ref().map(|c| c.valid).unwrap_or(false);
        let settings_ok = self.providers.is_empty() || self.settings_step_valid;
        cluster_ok && settings_ok
    }

    /// JSON view of the accumulated session, shaped like the submission
    /// payload the platform API expects.
    pub fn snapshot(&self) -> serde_json::Value {
        let spec: serde_json::Map<String, serde_json::Value> = self
            .providers
            .iter()
            .map(|(p, s)| {
                (
                    p.as_str().to_string(),
                    serde_json::to_value(s).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        json!({
            "name": self.cluster.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            "version": self.cluster.as_ref().map(|c| c.version.clone()).unwrap_or_default(),
            "valid": self.is_ready(),
            "spec": serde_json::Value::Object(spec),
        })
    }
}
