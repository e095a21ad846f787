pub mod cluster_spec;

pub use cluster_spec::ClusterSpecStep;

use std::time::Instant;

use crate::models::ClusterEntity;
use crate::presets::GkeSettingsStep;
use crate::session::WizardSession;

/// One console user's in-flight wizard: the shared session plus the step
/// controllers currently mounted.
pub struct WizardFlow {
    pub session: WizardSession,
    pub cluster_step: ClusterSpecStep,
    pub gke_step: Option<GkeSettingsStep>,
}

impl WizardFlow {
    pub fn new(cluster: &ClusterEntity, expose_dev_versions: bool) -> Self {
        WizardFlow {
            session: WizardSession::new(),
            cluster_step: ClusterSpecStep::new(cluster, expose_dev_versions),
            gke_step: None,
        }
    }

    /// Move any debounced step output whose quiet period has elapsed into
    /// the session. Driven by the background flush task and by page loads.
    pub fn pump(&mut self, now: Instant) {
        if let Some(update) = self.cluster_step.poll(now) {
            self.session.apply(update);
        }
    }

    /// Drain pending step output regardless of timers, for when the user
    /// jumps to the summary and the last edit must not be lost.
    pub fn settle(&mut self) {
        if let Some(update) = self.cluster_step.flush() {
            self.session.apply(update);
        }
    }
}
