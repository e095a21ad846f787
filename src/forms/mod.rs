pub mod field;
pub mod form;
pub mod validators;

pub use field::{FieldControl, FieldStatus};
pub use form::Form;
pub use validators::{ValidationError, Validator};
