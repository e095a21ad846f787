pub mod admins;
pub mod auth;
pub mod helpers;
pub mod presets;
pub mod wizard;

pub use admins::{admins_add_viewer, admins_list};
pub use auth::{login_get, login_post, logout_post, root_get};
pub use presets::{preset_gke_close, preset_gke_get, preset_gke_post};
pub use wizard::{
    wizard_cluster_get, wizard_cluster_post, wizard_generate_name, wizard_summary_get,
};
