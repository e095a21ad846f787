use clusterdeck::forms::{Form, ValidationError, Validator};

#[test]
fn test_required_rejects_blank_values() {
    assert_eq!(
        Validator::Required.validate("  "),
        Err(ValidationError::Required)
    );
    assert_eq!(Validator::Required.validate("x"), Ok(()));
}

#[test]
fn test_min_length_counts_characters() {
    let v = Validator::MinLength(5);
    assert_eq!(v.validate("abcd"), Err(ValidationError::TooShort { min: 5 }));
    assert_eq!(v.validate("abcde"), Ok(()));
    // Empty is the Required validator's problem, not MinLength's.
    assert_eq!(v.validate(""), Ok(()));
}

#[test]
fn test_email_format() {
    let v = Validator::EmailFormat;
    assert_eq!(v.validate("user@example.com"), Ok(()));
    assert_eq!(v.validate("user@example"), Err(ValidationError::InvalidEmail));
    assert_eq!(v.validate("not an email"), Err(ValidationError::InvalidEmail));
    assert_eq!(v.validate("@example.com"), Err(ValidationError::InvalidEmail));
    assert_eq!(v.validate(""), Ok(()));
}

#[test]
fn test_field_status_recomputed_on_every_write() {
    let mut form = Form::new().with_field("name", "", vec![Validator::Required]);
    assert!(!form.is_valid());

    form.set_value("name", "my-cluster");
    assert!(form.is_valid());

    form.set_value("name", "");
    assert!(!form.is_valid());
}

#[test]
fn test_form_validity_is_and_of_all_fields() {
    let mut form = Form::new()
        .with_field("name", "cluster-a", vec![Validator::Required, Validator::MinLength(5)])
        .with_field("version", "", vec![]);
    assert!(form.is_valid());

    form.set_value("name", "ab");
    assert!(!form.is_valid());
    assert!(form.control("version").unwrap().is_valid());

    form.set_value("name", "abcde");
    assert!(form.is_valid());
}

#[test]
fn test_set_marks_dirty_patch_does_not() {
    let mut form = Form::new().with_field("name", "", vec![Validator::Required]);
    form.patch_value("name", "generated-name");
    assert!(!form.control("name").unwrap().is_dirty());
    assert!(form.is_valid());

    form.set_value("name", "typed-name");
    assert!(form.control("name").unwrap().is_dirty());
}

#[test]
fn test_unknown_field_writes_are_ignored() {
    let mut form = Form::new().with_field("name", "seed-name", vec![]);
    form.set_value("nope", "value");
    assert_eq!(form.value("name"), "seed-name");
    assert_eq!(form.value("nope"), "");
}

#[test]
fn test_field_names_keep_declaration_order() {
    let form = Form::new()
        .with_field("name", "", vec![])
        .with_field("version", "", vec![]);
    let names: Vec<&str> = form.field_names().collect();
    assert_eq!(names, vec!["name", "version"]);
}
