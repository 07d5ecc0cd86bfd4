//! Text shortening and capitalization for previews and captions

use crate::errors::{Result, UtilError};

/// Marker appended to truncated text
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Shorten `text` to `max_length` characters followed by `...`
///
/// Length is counted in Unicode scalar values, so a multi-byte character is
/// never cut in half. Combining sequences can still be split.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    truncate_text_with(text, max_length, DEFAULT_ELLIPSIS)
}

/// Shorten `text` with a caller-chosen marker
pub fn truncate_text_with(text: &str, max_length: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(max_length) {
        // Fewer than max_length + 1 characters
        None => text.to_string(),
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + ellipsis.len());
            truncated.push_str(&text[..cut]);
            truncated.push_str(ellipsis);
            truncated
        }
    }
}

/// Uppercase the first character and keep the rest as-is
///
/// Returns [`UtilError::EmptyInput`] for an empty string.
pub fn capitalize_first_letter(text: &str) -> Result<String> {
    let mut chars = text.chars();
    let first = chars
        .next()
        .ok_or_else(|| UtilError::EmptyInput("cannot capitalize an empty string".to_string()))?;

    let mut capitalized: String = first.to_uppercase().collect();
    capitalized.push_str(chars.as_str());
    Ok(capitalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("", 0), "");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_text("hello world", 5), "hello...");
        assert_eq!(truncate_text("hello", 0), "...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Thai characters are 3 bytes each in UTF-8
        assert_eq!(truncate_text("สวัสดีครับ", 3), "สวั...");
        assert_eq!(truncate_text("héllo wörld", 7), "héllo w...");
    }

    #[test]
    fn test_truncate_custom_marker() {
        assert_eq!(truncate_text_with("hello world", 5, "…"), "hello…");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize_first_letter("hello world").unwrap(), "Hello world");
        assert_eq!(capitalize_first_letter("Already").unwrap(), "Already");
        assert_eq!(capitalize_first_letter("élan").unwrap(), "Élan");
        assert_eq!(capitalize_first_letter("ßtraße").unwrap(), "SStraße");
    }

    #[test]
    fn test_capitalize_empty_is_error() {
        assert!(matches!(
            capitalize_first_letter(""),
            Err(UtilError::EmptyInput(_))
        ));
    }
}
