//! Integration tests for formatting, validation and ids

use chrono::{Duration, TimeZone, Utc};
use studykit::format::{
    capitalize_first_letter, format_date, format_date_in, format_file_size, format_relative,
    format_time, truncate_text, Locale,
};
use studykit::ids::generate_id;
use studykit::validation::is_valid_email;
use studykit::UtilError;

#[test]
fn test_file_size_examples() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
}

#[test]
fn test_email_examples() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("a@b"));
}

#[test]
fn test_truncate_examples() {
    assert_eq!(truncate_text("hello", 10), "hello");
    assert_eq!(truncate_text("hello world", 5), "hello...");
}

#[test]
fn test_chat_message_caption() {
    let sent = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
    let now = sent + Duration::minutes(3);

    assert_eq!(format_date(&sent), "19 ตุลาคม 2026");
    assert_eq!(format_time(&sent), "09:30");
    assert_eq!(format_date_in(&sent, Locale::English), "October 19th, 2026");
    assert_eq!(format_relative(&sent, &now, Locale::English), "3 minutes ago");
}

#[test]
fn test_capitalize_and_ids() {
    assert_eq!(capitalize_first_letter("notes").unwrap(), "Notes");
    assert!(matches!(
        capitalize_first_letter(""),
        Err(UtilError::EmptyInput(_))
    ));

    let id = generate_id();
    assert_eq!(id.len(), 9);
    assert_ne!(id, generate_id());
}
