pub mod add_viewer;

pub use add_viewer::{AddViewerDialog, DialogState};
