use std::time::{Duration, Instant};

use clusterdeck::models::{ClusterEntity, ClusterSpec, MasterVersion};
use clusterdeck::services::ClusterNameGenerator;
use clusterdeck::session::SessionUpdate;
use clusterdeck::wizard::cluster_spec::{NAME_FIELD, SPEC_DEBOUNCE, VERSION_FIELD};
use clusterdeck::wizard::{ClusterSpecStep, WizardFlow};

fn seed() -> ClusterEntity {
    ClusterEntity {
        name: "seeded-name".into(),
        spec: ClusterSpec {
            version: "1.29.0".into(),
        },
    }
}

fn plain_version(version: &str) -> MasterVersion {
    MasterVersion {
        version: version.into(),
        default: false,
        allowed_node_versions: vec![],
    }
}

fn catalog() -> Vec<MasterVersion> {
    vec![
        plain_version("1.29.0"),
        MasterVersion {
            version: "1.30.1".into(),
            default: true,
            allowed_node_versions: vec!["1.30.1".into()],
        },
        plain_version("1.31.0"),
    ]
}

#[test]
fn test_form_seeded_from_cluster_entity() {
    let step = ClusterSpecStep::new(&seed(), false);
    assert_eq!(step.form().value(NAME_FIELD), "seeded-name");
    assert_eq!(step.form().value(VERSION_FIELD), "1.29.0");
    assert!(step.form().is_valid());
}

#[test]
fn test_short_name_invalidates_the_step() {
    let mut step = ClusterSpecStep::new(&seed(), false);
    step.set_name("abc", Instant::now());
    assert!(!step.form().is_valid());
}

#[test]
fn test_default_version_surfaces_into_the_form() {
    let mut step = ClusterSpecStep::new(&seed(), false);
    step.apply_master_versions(catalog(), Instant::now());

    assert_eq!(step.default_version(), Some("1.30.1"));
    assert_eq!(step.form().value(VERSION_FIELD), "1.30.1");
}

#[test]
fn test_first_default_wins_when_several_are_flagged() {
    let mut versions = catalog();
    versions[2].default = true;
    let mut step = ClusterSpecStep::new(&seed(), false);
    step.apply_master_versions(versions, Instant::now());

    assert_eq!(step.default_version(), Some("1.30.1"));
}

#[test]
fn test_no_default_leaves_the_seeded_version_alone() {
    let mut step = ClusterSpecStep::new(&seed(), false);
    step.apply_master_versions(vec![plain_version("1.31.0")], Instant::now());

    assert_eq!(step.default_version(), None);
    assert_eq!(step.form().value(VERSION_FIELD), "1.29.0");
}

#[test]
fn test_dev_hosts_get_three_extra_versions_appended_in_order() {
    let mut step = ClusterSpecStep::new(&seed(), true);
    step.apply_master_versions(catalog(), Instant::now());

    let versions: Vec<&str> = step
        .master_versions()
        .iter()
        .map(|v| v.version.as_str())
        .collect();
    assert_eq!(
        versions,
        vec!["1.29.0", "1.30.1", "1.31.0", "3.9", "3.10", "3.11"]
    );
    for extra in &step.master_versions()[3..] {
        assert_eq!(extra.allowed_node_versions, vec!["1.11.5".to_string()]);
        assert!(!extra.default);
    }
}

#[test]
fn test_non_dev_hosts_see_only_the_api_catalog() {
    let mut step = ClusterSpecStep::new(&seed(), false);
    step.apply_master_versions(catalog(), Instant::now());
    assert_eq!(step.master_versions().len(), 3);
}

#[test]
fn test_generate_name_touches_only_the_name_field() {
    let mut step = ClusterSpecStep::new(&seed(), false);
    let generator = ClusterNameGenerator::new();
    step.generate_name(&generator, Instant::now());

    assert_ne!(step.form().value(NAME_FIELD), "seeded-name");
    assert!(!step.form().value(NAME_FIELD).is_empty());
    assert_eq!(step.form().value(VERSION_FIELD), "1.29.0");
}

#[test]
fn test_generated_names_satisfy_the_name_validators() {
    let generator = ClusterNameGenerator::new();
    for _ in 0..50 {
        let name = generator.generate_name();
        assert!(name.len() >= 5, "too short: {}", name);
        assert!(!name.contains(' '));
    }
}

#[test]
fn test_changes_reach_the_session_only_after_the_quiet_period() {
    let t0 = Instant::now();
    let mut flow = WizardFlow::new(&seed(), false);

    flow.cluster_step.set_name("typed-cluster", t0);
    flow.pump(t0 + Duration::from_millis(100));
    assert!(flow.session.cluster().is_none());

    flow.pump(t0 + SPEC_DEBOUNCE);
    let branch = flow.session.cluster().expect("debounced update applied");
    assert_eq!(branch.name, "typed-cluster");
    assert_eq!(branch.version, "1.29.0");
    assert!(branch.valid);
}

#[test]
fn test_rapid_edits_collapse_to_the_last_state() {
    let t0 = Instant::now();
    let mut flow = WizardFlow::new(&seed(), false);

    flow.cluster_step.set_name("a", t0);
    flow.cluster_step
        .set_name("final-name", t0 + Duration::from_millis(300));
    flow.pump(t0 + Duration::from_millis(300) + SPEC_DEBOUNCE);

    let branch = flow.session.cluster().unwrap();
    assert_eq!(branch.name, "final-name");
}

#[test]
fn test_settle_drains_a_pending_edit() {
    let t0 = Instant::now();
    let mut flow = WizardFlow::new(&seed(), false);
    flow.cluster_step.set_version("1.31.0", t0);
    assert!(flow.cluster_step.has_pending_change());

    flow.settle();
    assert_eq!(flow.session.cluster().unwrap().version, "1.31.0");
    assert!(!flow.cluster_step.has_pending_change());
}

#[test]
fn test_version_default_push_goes_through_the_debouncer() {
    let t0 = Instant::now();
    let mut step = ClusterSpecStep::new(&seed(), false);
    step.apply_master_versions(catalog(), t0);

    assert_eq!(step.poll(t0), None);
    match step.poll(t0 + SPEC_DEBOUNCE) {
        Some(SessionUpdate::ClusterSpec { version, .. }) => assert_eq!(version, "1.30.1"),
        other => panic!("expected cluster update, got {:?}", other),
    }
}
