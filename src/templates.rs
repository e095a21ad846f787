use askama::Template;

use crate::models::{Admin, CurrentUser, MasterVersion};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admins.html")]
pub struct AdminsTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub admins: &'a [Admin],
    pub email_value: String,
    pub email_errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "wizard_cluster.html")]
pub struct WizardClusterTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub name_value: String,
    pub name_errors: Vec<String>,
    pub version_value: String,
    pub versions: &'a [MasterVersion],
    pub default_version: Option<String>,
    pub form_valid: bool,
}

#[derive(Template)]
#[template(path = "wizard_summary.html")]
pub struct WizardSummaryTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub snapshot: String,
    pub ready: bool,
}

#[derive(Template)]
#[template(path = "preset_gke.html")]
pub struct PresetGkeTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub service_account_value: String,
    pub service_account_errors: Vec<String>,
    pub step_valid: bool,
}
