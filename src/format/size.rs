//! Human-readable byte counts for uploaded files

/// Unit labels, base 1024
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const KIBI: u64 = 1024;

/// Format a byte count as `<value> <unit>` with at most two decimals
///
/// Sizes past the last unit stay in GB (`1 TiB` renders as `1024 GB`).
///
/// ```
/// # use studykit::format::format_file_size;
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // Integer search avoids log() rounding at exact powers of 1024
    let mut unit_index = 0;
    let mut divisor = 1u64;
    while unit_index + 1 < SIZE_UNITS.len() && bytes / divisor >= KIBI {
        divisor *= KIBI;
        unit_index += 1;
    }

    let scaled = bytes as f64 / divisor as f64;
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{} {}", rounded, SIZE_UNITS[unit_index])
}
