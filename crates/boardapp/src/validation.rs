//! Post input validation.
//!
//! Title and content are required; surrounding whitespace never counts.
//! Applied identically on create and update, at the store layer, so the
//! non-empty invariant holds no matter which path mutates a row.

use crate::error::{BoardError, Result};

/// Trims `title` and `content` and returns the trimmed pair, or the
/// field-specific validation error for whichever is empty after trimming.
/// Title is checked first.
///
/// # Examples
/// ```
/// use boardapp::validation::validate_post_input;
///
/// let (title, content) = validate_post_input("  Hello  ", "World").unwrap();
/// assert_eq!(title, "Hello");
/// assert_eq!(content, "World");
///
/// assert!(validate_post_input("   ", "World").is_err());
/// assert!(validate_post_input("Hello", "").is_err());
/// ```
pub fn validate_post_input(title: &str, content: &str) -> Result<(String, String)> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::TitleRequired);
    }

    let content = content.trim();
    if content.is_empty() {
        return Err(BoardError::ContentRequired);
    }

    Ok((title.to_string(), content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_input() {
        let (title, content) = validate_post_input(" a ", "\tb\n").unwrap();
        assert_eq!(title, "a");
        assert_eq!(content, "b");
    }

    #[test]
    fn rejects_empty_title() {
        assert!(matches!(
            validate_post_input("", "content"),
            Err(BoardError::TitleRequired)
        ));
        assert!(matches!(
            validate_post_input("   ", "content"),
            Err(BoardError::TitleRequired)
        ));
    }

    #[test]
    fn rejects_empty_content() {
        assert!(matches!(
            validate_post_input("title", ""),
            Err(BoardError::ContentRequired)
        ));
        assert!(matches!(
            validate_post_input("title", " \n "),
            Err(BoardError::ContentRequired)
        ));
    }

    #[test]
    fn title_checked_before_content() {
        assert!(matches!(
            validate_post_input("", ""),
            Err(BoardError::TitleRequired)
        ));
    }
}
