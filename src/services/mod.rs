pub mod name_generator;
pub mod notification;
pub mod settings_service;
pub mod user_service;
pub mod version_service;

// Re-export commonly used functions
pub use name_generator::ClusterNameGenerator;
pub use notification::{FlashNotifier, Notifier};
pub use settings_service::{list_admins, set_admin};
pub use user_service::{
    generate_password_hash, load_users_from_file, persist_users_file, random_session_id,
    verify_password,
};
pub use version_service::get_master_versions;
