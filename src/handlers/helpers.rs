use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, CurrentUser};
use crate::util::hostname_from_url;

pub struct TemplateGlobals {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get("session_id").map(|c| c.value().to_string())
}

pub fn current_username_from_jar(state: &AppState, jar: &CookieJar) -> Option<String> {
    let sid = session_id_from_jar(jar)?;
    state.sessions.lock().unwrap().get(&sid).cloned()
}

pub fn build_current_user(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let username = current_username_from_jar(state, jar)?;
    let users = state.users.lock().unwrap();
    let rec = users.get(&username)?;
    Some(CurrentUser {
        username: username.clone(),
        role: rec.role.clone(),
    })
}

pub fn take_flash_messages(state: &AppState, jar: &CookieJar) -> Vec<String> {
    let Some(sid) = session_id_from_jar(jar) else {
        return vec![];
    };
    let mut fs = state.flash_store.lock().unwrap();
    fs.remove(&sid).unwrap_or_default()
}

pub fn build_template_globals(state: &AppState, jar: &CookieJar) -> TemplateGlobals {
    let flash_messages = take_flash_messages(state, jar);
    TemplateGlobals {
        current_user: build_current_user(state, jar),
        api_hostname: hostname_from_url(&state.api_base_url),
        base_url: state.public_base_url.clone(),
        has_flash_messages: !flash_messages.is_empty(),
        flash_messages,
    }
}

/// Redirect to the login page unless the cookie maps to a live console
/// session. Every settings and wizard handler goes through this first.
pub fn ensure_signed_in(state: &AppState, jar: &CookieJar) -> Option<Response> {
    if current_username_from_jar(state, jar).is_none() {
        return Some(Redirect::to("/login").into_response());
    }
    None
}

pub fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}
