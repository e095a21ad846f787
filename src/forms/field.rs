use super::validators::{ValidationError, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

/// A single form control. Status is recomputed synchronously on every
/// value transition, so reads never observe a stale validity.
#[derive(Debug, Clone)]
pub struct FieldControl {
    value: String,
    validators: Vec<Validator>,
    status: FieldStatus,
    errors: Vec<ValidationError>,
    dirty: bool,
}

impl FieldControl {
    pub fn new(initial: &str, validators: Vec<Validator>) -> Self {
        let mut control = FieldControl {
            value: initial.to_string(),
            validators,
            status: FieldStatus::Valid,
            errors: vec![],
            dirty: false,
        };
        control.revalidate();
        control
    }

    /// User-driven edit. Marks the control dirty.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.dirty = true;
        self.revalidate();
    }

    /// Programmatic write (seeding, generated names, fetched defaults).
    /// Does not mark the control dirty.
    pub fn patch_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.revalidate();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.status == FieldStatus::Valid
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn revalidate(&mut self) {
        self.errors = self
            .validators
            .iter()
            .filter_map(|v| v.validate(&self.value).err())
            .collect();
        self.status = if self.errors.is_empty() {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        };
    }
}
