pub mod inquiry;
pub mod new_project;
pub mod project;
pub mod project_draft;

/// Normalize a free-text form field: blank means absent, never an empty
/// string on the wire.
pub(crate) fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
