use clusterdeck::presets::encoding::encode;
use clusterdeck::presets::GkeSettingsStep;
use clusterdeck::session::{Provider, ProviderSettings, SessionUpdate, WizardSession};

fn apply_all(session: &mut WizardSession, updates: Vec<SessionUpdate>) {
    for u in updates {
        session.apply(u);
    }
}

fn gke_branch(session: &WizardSession) -> Option<&str> {
    session.provider(Provider::Gke).map(|s| match s {
        ProviderSettings::Gke { service_account } => service_account.as_str(),
    })
}

#[test]
fn test_plain_service_account_is_stored_encoded() {
    let mut session = WizardSession::new();
    let mut step = GkeSettingsStep::new();

    let raw = "{\"type\": \"service_account\"}";
    apply_all(&mut session, step.set_service_account(raw));

    assert_eq!(gke_branch(&session), Some(encode(raw).as_str()));
    assert!(session.settings_step_valid());
}

#[test]
fn test_encoded_service_account_is_stored_unchanged() {
    let mut session = WizardSession::new();
    let mut step = GkeSettingsStep::new();

    let already = encode("credential");
    apply_all(&mut session, step.set_service_account(&already));

    assert_eq!(gke_branch(&session), Some(already.as_str()));
}

#[test]
fn test_duplicate_values_do_not_reemit_the_branch() {
    let mut step = GkeSettingsStep::new();

    let first = step.set_service_account("secret material");
    assert!(first
        .iter()
        .any(|u| matches!(u, SessionUpdate::ProviderSettings { .. })));

    let second = step.set_service_account("secret material");
    assert!(!second
        .iter()
        .any(|u| matches!(u, SessionUpdate::ProviderSettings { .. })));
    // Validity is still mirrored on every edit.
    assert!(second
        .iter()
        .any(|u| matches!(u, SessionUpdate::SettingsValidity(true))));
}

#[test]
fn test_empty_value_invalidates_the_step_and_clears_nothing() {
    let mut session = WizardSession::new();
    let mut step = GkeSettingsStep::new();

    apply_all(&mut session, step.set_service_account("secret"));
    assert!(session.settings_step_valid());

    apply_all(&mut session, step.set_service_account(""));
    assert!(!session.settings_step_valid());
    // The branch stays until teardown; only its value went empty.
    assert_eq!(gke_branch(&session), Some(""));
}

#[test]
fn test_initial_validity_is_false() {
    let mut session = WizardSession::new();
    session.apply(SessionUpdate::SettingsValidity(true));

    let step = GkeSettingsStep::new();
    session.apply(step.initial_validity());
    assert!(!session.settings_step_valid());
}

#[test]
fn test_teardown_removes_the_provider_branch() {
    let mut session = WizardSession::new();
    let mut step = GkeSettingsStep::new();

    apply_all(&mut session, step.set_service_account("secret"));
    assert!(session.has_provider(Provider::Gke));

    session.apply(step.teardown());
    assert!(!session.has_provider(Provider::Gke));
}
