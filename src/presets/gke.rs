use crate::forms::{Form, Validator};
use crate::presets::encoding::ensure_encoded;
use crate::session::{Provider, ProviderSettings, SessionUpdate};

pub const SERVICE_ACCOUNT_FIELD: &str = "service_account";

/// GKE settings step of the preset dialog. Owns the `spec.gke` session
/// branch for as long as the step is mounted.
pub struct GkeSettingsStep {
    form: Form,
    last_value: Option<String>,
}

impl GkeSettingsStep {
    pub fn new() -> Self {
        GkeSettingsStep {
            form: Form::new().with_field(SERVICE_ACCOUNT_FIELD, "", vec![Validator::Required]),
            last_value: None,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Validity report for the moment the step is mounted, before any real
    /// status has been computed. Always false, so a half-configured dialog
    /// cannot advance on a stale flag from a previous provider step.
    pub fn initial_validity(&self) -> SessionUpdate {
        SessionUpdate::SettingsValidity(false)
    }

    /// Handle an edit of the service-account field. Duplicate consecutive
    /// values do not re-emit the provider branch; validity is mirrored on
    /// every edit.
    pub fn set_service_account(&mut self, raw: &str) -> Vec<SessionUpdate> {
        self.form.set_value(SERVICE_ACCOUNT_FIELD, raw);
        let mut updates = Vec::with_capacity(2);

        let current = self.form.value(SERVICE_ACCOUNT_FIELD).to_string();
        if self.last_value.as_deref() != Some(current.as_str()) {
            self.last_value = Some(current.clone());
            updates.push(SessionUpdate::ProviderSettings {
                provider: Provider::Gke,
                settings: ProviderSettings::Gke {
                    service_account: ensure_encoded(&current),
                },
            });
        }

        updates.push(SessionUpdate::SettingsValidity(self.form.is_valid()));
        updates
    }

    /// Leaving the step removes its branch so stale GKE settings cannot
    /// leak into a submission for another provider.
    pub fn teardown(self) -> SessionUpdate {
        SessionUpdate::ClearProvider(Provider::Gke)
    }
}

impl Default for GkeSettingsStep {
    fn default() -> Self {
        GkeSettingsStep::new()
    }
}
