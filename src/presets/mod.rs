pub mod encoding;
pub mod gke;

pub use gke::GkeSettingsStep;
