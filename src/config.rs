use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_API_TOKEN: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const DEFAULT_OWNER_USERNAME: &str = "owner";
pub const DEFAULT_OWNER_PASSWORD: &str = "owner123";
pub const DEFAULT_OWNER_ROLE: &str = "owner";
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;
pub const DEFAULT_DEV_HOST_MARKER: &str = "dev.";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_api_token() -> String {
    env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
}

pub fn get_public_base_url() -> String {
    let raw = env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string());
    let sanitized = sanitize_base_url(&raw);
    if sanitized.is_empty() {
        "http://localhost:8080".to_string()
    } else {
        sanitized
    }
}

/// Decide once, at startup, whether the console exposes the pre-release
/// master versions. `EXPOSE_DEV_VERSIONS` wins outright; without it the
/// machine hostname is checked for the dev marker substring. Controllers
/// only ever see the resolved boolean.
pub fn resolve_expose_dev_versions(hostname: &str) -> bool {
    match env::var("EXPOSE_DEV_VERSIONS") {
        Ok(raw) => matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => {
            let marker =
                env::var("DEV_HOST_MARKER").unwrap_or_else(|_| DEFAULT_DEV_HOST_MARKER.to_string());
            !marker.is_empty() && hostname.contains(&marker)
        }
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
