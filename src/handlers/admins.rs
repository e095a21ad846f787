use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::dialogs::AddViewerDialog;
use crate::models::{Admin, AppState};
use crate::services::{list_admins, set_admin, FlashNotifier};
use crate::templates::AdminsTemplate;

use super::helpers::{
    build_template_globals, ensure_signed_in, render_template, session_id_from_jar,
    TemplateGlobals,
};

pub async fn admins_list(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }
    let admins = fetch_admins(&state).await;
    render_admins_page(&state, &jar, &admins, String::new(), vec![])
}

#[derive(Deserialize)]
pub struct AddViewerForm {
    pub email: String,
}

/// Submit path of the add-global-viewer dialog. An invalid form keeps the
/// dialog in editing; a failed platform call does the same (no error
/// terminal, the user retries); success closes the dialog, flashes the
/// notification, and reloads the admins page.
pub async fn admins_add_viewer(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AddViewerForm>,
) -> Response {
    if let Some(r) = ensure_signed_in(&state, &jar) {
        return r;
    }

    let mut dialog = AddViewerDialog::new();
    dialog.set_email(form.email.trim());

    let Some(update) = dialog.submit() else {
        let errors = dialog
            .form()
            .control(crate::dialogs::add_viewer::EMAIL_FIELD)
            .map(|c| c.errors().iter().map(|e| e.to_string()).collect())
            .unwrap_or_default();
        let admins = fetch_admins(&state).await;
        return render_admins_page(&state, &jar, &admins, form.email, errors);
    };

    match set_admin(&state.client, &state.api_base_url, &state.api_token, update).await {
        Ok(admin) => {
            if let Some(sid) = session_id_from_jar(&jar) {
                let notifier = FlashNotifier::new(state.flash_store.clone(), &sid);
                dialog.on_next(admin, &notifier);
            }
            Redirect::to("/settings/admins").into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "set_admin failed");
            dialog.on_error();
            let admins = fetch_admins(&state).await;
            render_admins_page(
                &state,
                &jar,
                &admins,
                form.email,
                vec![e.to_string()],
            )
        }
    }
}

async fn fetch_admins(state: &AppState) -> Vec<Admin> {
    match list_admins(&state.client, &state.api_base_url, &state.api_token).await {
        Ok(admins) => admins,
        Err(e) => {
            tracing::warn!(error = %e, "list_admins failed");
            vec![]
        }
    }
}

fn render_admins_page(
    state: &AppState,
    jar: &CookieJar,
    admins: &[Admin],
    email_value: String,
    email_errors: Vec<String>,
) -> Response {
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(state, jar);
    render_template(AdminsTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        admins,
        email_value,
        email_errors,
    })
}
