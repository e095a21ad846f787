use super::field::FieldControl;
use super::validators::Validator;

/// Named collection of controls. Overall validity is the AND of all field
/// validities; it is derived on demand from per-field status, which every
/// write keeps current.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<(String, FieldControl)>,
}

impl Form {
    pub fn new() -> Self {
        Form { fields: vec![] }
    }

    pub fn with_field(mut self, name: &str, initial: &str, validators: Vec<Validator>) -> Self {
        self.fields
            .push((name.to_string(), FieldControl::new(initial, validators)));
        self
    }

    pub fn control(&self, name: &str) -> Option<&FieldControl> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn control_mut(&mut self, name: &str) -> Option<&mut FieldControl> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn value(&self, name: &str) -> &str {
        self.control(name).map(|c| c.value()).unwrap_or("")
    }

    /// User-driven edit of one field. Unknown field names are ignored.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(control) = self.control_mut(name) {
            control.set_value(value);
        }
    }

    /// Programmatic write of one field, leaving the others untouched.
    pub fn patch_value(&mut self, name: &str, value: &str) {
        if let Some(control) = self.control_mut(name) {
            control.patch_value(value);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, c)| c.is_valid())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}
