use crate::forms::{Form, Validator};
use crate::models::{Admin, AdminUpdate};
use crate::services::notification::Notifier;

pub const EMAIL_FIELD: &str = "email";

/// Dialog lifecycle. There is no error terminal: a failed submission drops
/// the dialog back to `FormEditing` so the user can retry.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    Initial,
    FormEditing,
    Submitting,
    ClosedSuccess(Admin),
    ClosedCancelled,
}

/// Collects one email address and promotes that user into the global
/// viewer group through the settings service.
pub struct AddViewerDialog {
    form: Form,
    state: DialogState,
}

impl AddViewerDialog {
    pub fn new() -> Self {
        AddViewerDialog {
            form: Form::new().with_field(
                EMAIL_FIELD,
                "",
                vec![Validator::Required, Validator::EmailFormat],
            ),
            state: DialogState::Initial,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn set_email(&mut self, value: &str) {
        if matches!(
            self.state,
            DialogState::Initial | DialogState::FormEditing
        ) {
            self.form.set_value(EMAIL_FIELD, value);
            self.state = DialogState::FormEditing;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
            && matches!(
                self.state,
                DialogState::Initial | DialogState::FormEditing
            )
    }

    /// Move into `Submitting` and hand back the settings-service payload.
    /// Returns `None` when the form is invalid or the dialog is not open
    /// for editing.
    pub fn submit(&mut self) -> Option<AdminUpdate> {
        if !self.can_submit() {
            return None;
        }
        self.state = DialogState::Submitting;
        Some(AdminUpdate {
            email: self.form.value(EMAIL_FIELD).to_string(),
            is_global_viewer: true,
        })
    }

    /// Settings service resolved: close with the returned record and emit
    /// the success notification naming the added user.
    pub fn on_next(&mut self, admin: Admin, notifier: &dyn Notifier) {
        notifier.success(&format!(
            "Added the {} user to the global viewer group",
            admin.name
        ));
        self.state = DialogState::ClosedSuccess(admin);
    }

    /// Settings service failed: stay open for retry.
    pub fn on_error(&mut self) {
        if self.state == DialogState::Submitting {
            self.state = DialogState::FormEditing;
        }
    }

    pub fn cancel(&mut self) {
        if !matches!(
            self.state,
            DialogState::ClosedSuccess(_) | DialogState::ClosedCancelled
        ) {
            self.state = DialogState::ClosedCancelled;
        }
    }

    /// The dialog result, present only after a successful close.
    pub fn result(&self) -> Option<&Admin> {
        match &self.state {
            DialogState::ClosedSuccess(admin) => Some(admin),
            _ => None,
        }
    }
}

impl Default for AddViewerDialog {
    fn default() -> Self {
        AddViewerDialog::new()
    }
}
