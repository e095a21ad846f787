use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::{AppState, ClusterEntity};
use crate::presets::gke::SERVICE_ACCOUNT_FIELD;
use crate::presets::GkeSettingsStep;
use crate::templates::PresetGkeTemplate;
use crate::wizard::WizardFlow;

use super::helpers::{
    build_template_globals, ensure_signed_in, render_template, session_id_from_jar,
    TemplateGlobals,
};

pub async fn preset_gke_get(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/login").into_response();
    };

    let (value, errors, step_valid) = {
        let mut wizards = state.wizards.lock().unwrap();
        let flow = wizards.entry(sid.clone()).or_insert_with(|| {
            WizardFlow::new(&ClusterEntity::default(), state.expose_dev_versions)
        });
        if flow.gke_step.is_none() {
            let step = GkeSettingsStep::new();
            flow.session.apply(step.initial_validity());
            flow.gke_step = Some(step);
        }
        let step = flow.gke_step.as_ref().unwrap();
        let errors: Vec<String> = step
            .form()
            .control(SERVICE_ACCOUNT_FIELD)
            .map(|c| c.errors().iter().map(|e| e.to_string()).collect())
            .unwrap_or_default();
        (
            step.form().value(SERVICE_ACCOUNT_FIELD).to_string(),
            errors,
            flow.session.settings_step_valid(),
        )
    };

    render_gke_page(&state, &jar, value, errors, step_valid)
}

#[derive(Deserialize)]
pub struct GkeSettingsForm {
    pub service_account: String,
}

pub async fn preset_gke_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<GkeSettingsForm>,
) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/login").into_response();
    };
    {
        let mut wizards = state.wizards.lock().unwrap();
        if let Some(flow) = wizards.get_mut(&sid) {
            if let Some(step) = flow.gke_step.as_mut() {
                for update in step.set_service_account(&form.service_account) {
                    flow.session.apply(update);
                }
            }
        }
    }
    Redirect::to("/settings/presets/gke").into_response()
}

/// Deselecting the provider step tears it down and drops its branch from
/// the session.
pub async fn preset_gke_close(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/login").into_response();
    };
    {
        let mut wizards = state.wizards.lock().unwrap();
        if let Some(flow) = wizards.get_mut(&sid) {
            if let Some(step) = flow.gke_step.take() {
                flow.session.apply(step.teardown());
            }
        }
    }
    Redirect::to("/settings/admins").into_response()
}

fn render_gke_page(
    state: &AppState,
    jar: &CookieJar,
    service_account_value: String,
    service_account_errors: Vec<String>,
    step_valid: bool,
) -> Response {
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(state, jar);
    render_template(PresetGkeTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        service_account_value,
        service_account_errors,
        step_valid,
    })
}
