use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::user_record::UserRecord;
use crate::services::notification::FlashStore;
use crate::wizard::WizardFlow;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<Mutex<HashMap<String, UserRecord>>>,
    pub sessions: Arc<Mutex<HashMap<String, String>>>,
    pub flash_store: FlashStore,
    /// In-flight wizard/preset flows keyed by console session id.
    pub wizards: Arc<Mutex<HashMap<String, WizardFlow>>>,
    pub api_base_url: String,
    pub api_token: String,
    pub public_base_url: String,
    pub client: reqwest::Client,
    /// Resolved once at startup; gates the pre-release master versions.
    pub expose_dev_versions: bool,
}
