//! Title Validation
//!
//! Rules checked when a task is created or edited. Stored data is not
//! re-validated.

use thiserror::Error;

use super::task::{Task, TaskId};

pub const MIN_TITLE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The text cannot be empty")]
    Empty,
    #[error("The text cannot contain only numbers")]
    OnlyDigits,
    #[error("The text must be at least 10 characters long")]
    TooShort,
    #[error("A task with this text already exists")]
    Duplicate,
}

/// Check a title against the local tasks.
///
/// Errors come back in a fixed order. An empty title short-circuits and is
/// reported alone. `editing_id` excludes the task being edited from the
/// duplicate check.
pub fn validate_title(text: &str, locals: &[Task], editing_id: Option<TaskId>) -> Vec<ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return vec![ValidationError::Empty];
    }

    let mut errors = Vec::new();

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::OnlyDigits);
    }

    if trimmed.chars().count() < MIN_TITLE_LEN {
        errors.push(ValidationError::TooShort);
    }

    let needle = trimmed.to_lowercase();
    let is_duplicate = locals
        .iter()
        .filter(|task| editing_id != Some(task.id))
        .any(|task| task.title.to_lowercase().trim() == needle);
    if is_duplicate {
        errors.push(ValidationError::Duplicate);
    }

    errors
}

/// Render errors as the message shown in the error panel
pub fn format_validation_errors(errors: &[ValidationError]) -> String {
    let mut message = String::from("Validation errors:\n\nTask Title:");
    for error in errors {
        message.push_str("\n• ");
        message.push_str(&error.to_string());
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn local(id: TaskId, title: &str) -> Task {
        Task::new_local(title, "", id)
    }

    #[test]
    fn test_empty_is_reported_alone() {
        assert_eq!(validate_title("", &[], None), vec![ValidationError::Empty]);
        assert_eq!(validate_title(" \t\n ", &[], None), vec![ValidationError::Empty]);
    }

    #[test]
    fn test_short_digits_report_both() {
        assert_eq!(
            validate_title("123456789", &[], None),
            vec![ValidationError::OnlyDigits, ValidationError::TooShort]
        );
    }

    #[test]
    fn test_long_digits_only() {
        assert_eq!(validate_title("1234567890", &[], None), vec![ValidationError::OnlyDigits]);
    }

    #[test]
    fn test_length_counts_trimmed_text() {
        assert_eq!(validate_title("   short   ", &[], None), vec![ValidationError::TooShort]);
        assert!(validate_title("  ten chars!  ", &[], None).is_empty());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 characters, 20 bytes
        assert!(validate_title("éééééééééé", &[], None).is_empty());
    }

    #[test]
    fn test_duplicate_is_case_insensitive() {
        let locals = vec![local(1, "Buy groceries")];
        assert_eq!(
            validate_title("  BUY GROCERIES ", &locals, None),
            vec![ValidationError::Duplicate]
        );
    }

    #[test]
    fn test_duplicate_excludes_task_being_edited() {
        let locals = vec![local(1, "Buy groceries"), local(2, "Walk the dog daily")];
        assert!(validate_title("buy groceries", &locals, Some(1)).is_empty());
        assert_eq!(
            validate_title("buy groceries", &locals, Some(2)),
            vec![ValidationError::Duplicate]
        );
    }

    #[test]
    fn test_all_rules_in_order() {
        let locals = vec![local(1, "12345")];
        assert_eq!(
            validate_title("12345", &locals, None),
            vec![
                ValidationError::OnlyDigits,
                ValidationError::TooShort,
                ValidationError::Duplicate,
            ]
        );
    }

    #[test]
    fn test_format_message() {
        let message = format_validation_errors(&[ValidationError::OnlyDigits, ValidationError::TooShort]);
        assert_eq!(
            message,
            "Validation errors:\n\nTask Title:\n• The text cannot contain only numbers\n• The text must be at least 10 characters long"
        );
    }
}
