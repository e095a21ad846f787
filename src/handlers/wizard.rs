use std::time::Instant;

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::{AppState, ClusterEntity, MasterVersion};
use crate::services::{get_master_versions, ClusterNameGenerator};
use crate::templates::{WizardClusterTemplate, WizardSummaryTemplate};
use crate::wizard::cluster_spec::NAME_FIELD;
use crate::wizard::WizardFlow;

use super::helpers::{
    build_template_globals, ensure_signed_in, render_template, session_id_from_jar,
    TemplateGlobals,
};

fn flow_entry<'a>(
    state: &AppState,
    wizards: &'a mut std::collections::HashMap<String, WizardFlow>,
    sid: &str,
) -> &'a mut WizardFlow {
    wizards.entry(sid.to_string()).or_insert_with(|| {
        WizardFlow::new(&ClusterEntity::default(), state.expose_dev_versions)
    })
}

pub async fn wizard_cluster_get(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/login").into_response();
    };

    // The catalog is fetched once per step activation; a flow that already
    // holds versions skips the round trip.
    let needs_versions = {
        let mut wizards = state.wizards.lock().unwrap();
        let flow = flow_entry(&state, &mut wizards, &sid);
        flow.cluster_step.master_versions().is_empty()
    };

    if needs_versions {
        match get_master_versions(&state.client, &state.api_base_url, &state.api_token).await {
            Ok(versions) => {
                let mut wizards = state.wizards.lock().unwrap();
                let flow = flow_entry(&state, &mut wizards, &sid);
                flow.cluster_step.apply_master_versions(versions, Instant::now());
            }
            Err(e) => {
                tracing::warn!(error = %e, "get_master_versions failed");
            }
        }
    }

    let (name_value, name_errors, version_value, versions, default_version, form_valid) = {
        let mut wizards = state.wizards.lock().unwrap();
        let flow = flow_entry(&state, &mut wizards, &sid);
        flow.pump(Instant::now());
        let step = &flow.cluster_step;
        let name_errors: Vec<String> = step
            .form()
            .control(NAME_FIELD)
            .map(|c| c.errors().iter().map(|e| e.to_string()).collect())
            .unwrap_or_default();
        (
            step.form().value(NAME_FIELD).to_string(),
            name_errors,
            step.form().value("version").to_string(),
            step.master_versions().to_vec(),
            step.default_version().map(|s| s.to_string()),
            step.form().is_valid(),
        )
    };

    render_wizard_page(
        &state,
        &jar,
        name_value,
        name_errors,
        version_value,
        &versions,
        default_version,
        form_valid,
    )
}

#[derive(Deserialize)]
pub struct ClusterSpecForm {
    pub name: String,
    pub version: String,
}

pub async fn wizard_cluster_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ClusterSpecForm>,
) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/login").into_response();
    };
    {
        let mut wizards = state.wizards.lock().unwrap();
        let flow = flow_entry(&state, &mut wizards, &sid);
        let now = Instant::now();
        flow.cluster_step.set_name(&form.name, now);
        flow.cluster_step.set_version(&form.version, now);
        flow.pump(now);
    }
    Redirect::to("/wizard/cluster").into_response()
}

pub async fn wizard_generate_name(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/login").into_response();
    };
    {
        let mut wizards = state.wizards.lock().unwrap();
        let flow = flow_entry(&state, &mut wizards, &sid);
        flow.cluster_step
            .generate_name(&ClusterNameGenerator::new(), Instant::now());
    }
    Redirect::to("/wizard/cluster").into_response()
}

pub async fn wizard_summary_get(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/login").into_response();
    };
    let (snapshot, ready) = {
        let mut wizards = state.wizards.lock().unwrap();
        let flow = flow_entry(&state, &mut wizards, &sid);
        flow.settle();
        (
            serde_json::to_string_pretty(&flow.session.snapshot()).unwrap_or_default(),
            flow.session.is_ready(),
        )
    };
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(WizardSummaryTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        snapshot,
        ready,
    })
}

#[allow(clippy::too_many_arguments)]
fn render_wizard_page(
    state: &AppState,
    jar: &CookieJar,
    name_value: String,
    name_errors: Vec<String>,
    version_value: String,
    versions: &[MasterVersion],
    default_version: Option<String>,
    form_valid: bool,
) -> Response {
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(state, jar);
    render_template(WizardClusterTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        name_value,
        name_errors,
        version_value,
        versions,
        default_version,
        form_valid,
    })
}
