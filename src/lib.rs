pub mod api;
pub mod config;
pub mod dialogs;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod presets;
pub mod routes;
pub mod services;
pub mod session;
pub mod templates;
pub mod util;
pub mod wizard;
