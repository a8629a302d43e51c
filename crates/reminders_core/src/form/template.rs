//! Message template insertion.

/// Editable message body of the email form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageField {
    pub value: String,
    pub focused: bool,
}

/// Replaces the message body with `text` and focuses the field.
///
/// Returns `false` without side effects when the page has no message field.
pub fn apply_message_template(field: Option<&mut MessageField>, text: &str) -> bool {
    match field {
        Some(field) => {
            field.value = text.to_string();
            field.focused = true;
            true
        }
        None => false,
    }
}
