use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use hex::encode as hex_encode;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

use crate::config::{
    DEFAULT_OWNER_PASSWORD, DEFAULT_OWNER_ROLE, DEFAULT_OWNER_USERNAME, DEFAULT_PBKDF2_ITERATIONS,
};
use crate::models::UserRecord;

pub fn generate_password_hash(password: &str) -> String {
    let mut salt_bytes = [0u8; 12];
    rand::rngs::OsRng.fill_bytes(&mut salt_bytes);
    let salt = hex_encode(salt_bytes);
    let mut dk = [0u8; 32];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        DEFAULT_PBKDF2_ITERATIONS,
        &mut dk,
    );
    let hash_hex = hex_encode(dk);
    format!(
        "pbkdf2:sha256:{}${}${}",
        DEFAULT_PBKDF2_ITERATIONS, salt, hash_hex
    )
}

pub fn verify_password(stored: &str, candidate: &str) -> bool {
    if let Some(rest) = stored.strip_prefix("pbkdf2:sha256:") {
        if let Some((iter_s, salt_hash)) = rest.split_once('$') {
            if let Some((salt, expected_hash)) = salt_hash.split_once('$') {
                if let Ok(iter) = iter_s.parse::<u32>() {
                    let mut dk = [0u8; 32];
                    pbkdf2_hmac::<Sha256>(candidate.as_bytes(), salt.as_bytes(), iter, &mut dk);
                    return hex_encode(dk) == expected_hash;
                }
            }
        }
    }
    false
}

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex_encode(b)
}

/// Load console users from disk, bootstrapping an owner record the first
/// time the console starts on a fresh machine.
pub fn load_users_from_file(path: &Path) -> Arc<Mutex<HashMap<String, UserRecord>>> {
    let mut map: HashMap<String, UserRecord> = HashMap::new();

    if path.exists() {
        if let Ok(text) = std::fs::read_to_string(path) {
            if let Ok(parsed) = serde_json::from_str::<HashMap<String, UserRecord>>(&text) {
                for (k, v) in parsed {
                    map.insert(k.to_lowercase(), v);
                }
            }
        }
    } else {
        map.insert(
            DEFAULT_OWNER_USERNAME.into(),
            UserRecord {
                password: generate_password_hash(DEFAULT_OWNER_PASSWORD),
                role: DEFAULT_OWNER_ROLE.into(),
            },
        );
        if let Ok(serialized) = serde_json::to_string_pretty(&map) {
            let _ = std::fs::write(path, serialized);
        }
    }

    Arc::new(Mutex::new(map))
}

pub fn persist_users_file(
    users_arc: &Arc<Mutex<HashMap<String, UserRecord>>>,
    path: &Path,
) -> Result<(), std::io::Error> {
    let users = users_arc.lock().unwrap();
    std::fs::write(path, serde_json::to_string_pretty(&*users)?)
}
