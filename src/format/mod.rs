//! Display formatting for dates, byte counts and text
//! Pure functions, safe to call from any view

pub mod date;
pub mod size;
pub mod text;

pub use date::{
    format_date, format_date_in, format_relative, format_relative_to_now, format_time,
    format_time_in, Locale,
};
pub use size::format_file_size;
pub use text::{capitalize_first_letter, truncate_text, truncate_text_with, DEFAULT_ELLIPSIS};
