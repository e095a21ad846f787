pub mod admin;
pub mod app_state;
pub mod cluster;
pub mod current_user;
pub mod user_record;

// Re-export commonly used items
pub use admin::{Admin, AdminUpdate};
pub use app_state::AppState;
pub use cluster::{ClusterEntity, ClusterSpec, MasterVersion};
pub use current_user::CurrentUser;
pub use user_record::UserRecord;
