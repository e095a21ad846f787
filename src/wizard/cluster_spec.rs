use std::time::{Duration, Instant};

use crate::forms::{Form, Validator};
use crate::models::{ClusterEntity, MasterVersion};
use crate::services::name_generator::ClusterNameGenerator;
use crate::session::{Debouncer, SessionUpdate};

pub const NAME_FIELD: &str = "name";
pub const VERSION_FIELD: &str = "version";

/// Quiet period before a form change is pushed into the session.
pub const SPEC_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Pre-release master versions shown only on dev hosts, appended after
/// whatever the API returned, in this order.
const DEV_VERSIONS: [&str; 3] = ["3.9", "3.10", "3.11"];
const DEV_ALLOWED_NODE_VERSION: &str = "1.11.5";

/// First wizard step: cluster name and master version. Every edit queues a
/// `{name, version, valid}` update behind the debouncer; the session only
/// sees the latest state once the form goes quiet.
pub struct ClusterSpecStep {
    form: Form,
    master_versions: Vec<MasterVersion>,
    default_version: Option<String>,
    expose_dev_versions: bool,
    debouncer: Debouncer<SessionUpdate>,
}

impl ClusterSpecStep {
    pub fn new(cluster: &ClusterEntity, expose_dev_versions: bool) -> Self {
        let form = Form::new()
            .with_field(
                NAME_FIELD,
                &cluster.name,
                vec![Validator::Required, Validator::MinLength(5)],
            )
            .with_field(VERSION_FIELD, &cluster.spec.version, vec![]);
        ClusterSpecStep {
            form,
            master_versions: vec![],
            default_version: None,
            expose_dev_versions,
            debouncer: Debouncer::new(SPEC_DEBOUNCE),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn master_versions(&self) -> &[MasterVersion] {
        &self.master_versions
    }

    pub fn default_version(&self) -> Option<&str> {
        self.default_version.as_deref()
    }

    pub fn set_name(&mut self, value: &str, now: Instant) {
        self.form.set_value(NAME_FIELD, value);
        self.queue_change(now);
    }

    pub fn set_version(&mut self, value: &str, now: Instant) {
        self.form.set_value(VERSION_FIELD, value);
        self.queue_change(now);
    }

    /// Overwrite the name field with a fresh candidate, leaving the other
    /// fields alone.
    pub fn generate_name(&mut self, generator: &ClusterNameGenerator, now: Instant) {
        self.form.patch_value(NAME_FIELD, &generator.generate_name());
        self.queue_change(now);
    }

    /// Take the fetched version catalog, expose the pre-release entries on
    /// dev hosts, and surface the default entry into the form. With more
    /// than one entry flagged default the first match wins.
    pub fn apply_master_versions(&mut self, versions: Vec<MasterVersion>, now: Instant) {
        self.master_versions = versions;

        if self.expose_dev_versions {
            for v in DEV_VERSIONS {
                self.master_versions.push(MasterVersion {
                    version: v.to_string(),
                    default: false,
                    allowed_node_versions: vec![DEV_ALLOWED_NODE_VERSION.to_string()],
                });
            }
        }

        if let Some(default) = self.master_versions.iter().find(|v| v.default) {
            self.default_version = Some(default.version.clone());
            let version = default.version.clone();
            self.form.patch_value(VERSION_FIELD, &version);
            self.queue_change(now);
        }
    }

    /// Hand out the debounced session update once the quiet period has
    /// elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<SessionUpdate> {
        self.debouncer.poll(now)
    }

    /// Drain any pending update immediately, for when the step is left
    /// before the quiet period elapses.
    pub fn flush(&mut self) -> Option<SessionUpdate> {
        self.debouncer.flush()
    }

    pub fn has_pending_change(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn queue_change(&mut self, now: Instant) {
        let update = SessionUpdate::ClusterSpec {
            name: self.form.value(NAME_FIELD).to_string(),
            version: self.form.value(VERSION_FIELD).to_string(),
            valid: self.form.is_valid(),
        };
        self.debouncer.push(update, now);
    }
}
