//! Localized date and time rendering
//!
//! Long calendar dates, short times of day and "time since" labels for
//! records fetched from the document store. Thai is the default locale.

use crate::errors::{Result, UtilError};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display locale for dates, times and relative labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Short language tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Thai => "th",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        // Accept region-qualified tags such as `th-TH` or `en_US`
        let language = s
            .trim()
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "th" => Ok(Locale::Thai),
            "en" => Ok(Locale::English),
            _ => Err(UtilError::UnknownLocale(s.to_string())),
        }
    }
}

/// Render an instant as a long calendar date in the default locale
pub fn format_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    format_date_in(instant, Locale::default())
}

/// Render an instant as a long calendar date
///
/// Thai: `19 ตุลาคม 2026`. English: `October 19th, 2026`.
pub fn format_date_in<Tz: TimeZone>(instant: &DateTime<Tz>, locale: Locale) -> String {
    let day = instant.day();
    let month = instant.month0() as usize;
    let year = instant.year();

    match locale {
        Locale::Thai => format!("{} {} {}", day, THAI_MONTHS[month], year),
        Locale::English => format!(
            "{} {}{}, {}",
            ENGLISH_MONTHS[month],
            day,
            ordinal_suffix(day),
            year
        ),
    }
}

/// Render an instant as a short time of day in the default locale
pub fn format_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    format_time_in(instant, Locale::default())
}

/// Render an instant as a short time of day
///
/// Thai uses a 24-hour clock (`14:05`), English a 12-hour one (`2:05 PM`).
pub fn format_time_in<Tz: TimeZone>(instant: &DateTime<Tz>, locale: Locale) -> String {
    match locale {
        Locale::Thai => format!("{:02}:{:02}", instant.hour(), instant.minute()),
        Locale::English => {
            let (is_pm, hour) = instant.hour12();
            let meridiem = if is_pm { "PM" } else { "AM" };
            format!("{}:{:02} {}", hour, instant.minute(), meridiem)
        }
    }
}

/// Coarse distance bucket between two instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    LessThanMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

const MINUTES_PER_DAY: i64 = 1440;
const MINUTES_PER_MONTH: i64 = 43_200;

impl Distance {
    fn between_seconds(seconds: i64) -> Self {
        let seconds = seconds.abs();
        let minutes = (seconds + 30) / 60;

        if seconds < 30 {
            Distance::LessThanMinute
        } else if minutes < 45 {
            Distance::Minutes(minutes.max(1))
        } else if minutes < 90 {
            Distance::AboutHours(1)
        } else if minutes < MINUTES_PER_DAY {
            Distance::AboutHours((minutes + 30) / 60)
        } else if minutes < 2520 {
            Distance::Days(1)
        } else if minutes < MINUTES_PER_MONTH {
            Distance::Days((minutes + MINUTES_PER_DAY / 2) / MINUTES_PER_DAY)
        } else if minutes < 64_800 {
            Distance::AboutMonths(1)
        } else if minutes < 86_400 {
            Distance::AboutMonths(2)
        } else {
            // Whole months elapsed decide between the month and year scales
            let months = minutes / MINUTES_PER_DAY * 12 / 365;
            if months < 12 {
                let nearest = (minutes + MINUTES_PER_MONTH / 2) / MINUTES_PER_MONTH;
                return Distance::Months(nearest.clamp(2, 11));
            }

            let (years, remainder) = (months / 12, months % 12);
            if remainder < 3 {
                Distance::AboutYears(years)
            } else if remainder < 9 {
                Distance::OverYears(years)
            } else {
                Distance::AlmostYears(years + 1)
            }
        }
    }

    fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::English => {
                let plural = |n: i64, unit: &str| {
                    if n == 1 {
                        format!("1 {}", unit)
                    } else {
                        format!("{} {}s", n, unit)
                    }
                };
                match *self {
                    Distance::LessThanMinute => "less than a minute".to_string(),
                    Distance::Minutes(n) => plural(n, "minute"),
                    Distance::AboutHours(n) => format!("about {}", plural(n, "hour")),
                    Distance::Days(n) => plural(n, "day"),
                    Distance::AboutMonths(n) => format!("about {}", plural(n, "month")),
                    Distance::Months(n) => plural(n, "month"),
                    Distance::AboutYears(n) => format!("about {}", plural(n, "year")),
                    Distance::OverYears(n) => format!("over {}", plural(n, "year")),
                    Distance::AlmostYears(n) => format!("almost {}", plural(n, "year")),
                }
            }
            Locale::Thai => match *self {
                Distance::LessThanMinute => "น้อยกว่า 1 นาที".to_string(),
                Distance::Minutes(n) => format!("{} นาที", n),
                Distance::AboutHours(n) => format!("ประมาณ {} ชั่วโมง", n),
                Distance::Days(n) => format!("{} วัน", n),
                Distance::AboutMonths(n) => format!("ประมาณ {} เดือน", n),
                Distance::Months(n) => format!("{} เดือน", n),
                Distance::AboutYears(n) => format!("ประมาณ {} ปี", n),
                Distance::OverYears(n) => format!("มากกว่า {} ปี", n),
                Distance::AlmostYears(n) => format!("เกือบ {} ปี", n),
            },
        }
    }
}

/// Render how long ago (or how far ahead) `instant` is relative to `now`
///
/// Used for chat message captions: `5 minutes ago`, `in about 2 hours`,
/// `5 นาทีที่ผ่านมา`.
pub fn format_relative<Tz1, Tz2>(
    instant: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
    locale: Locale,
) -> String
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let delta = now.with_timezone(&Utc) - instant.with_timezone(&Utc);
    let seconds = delta.num_seconds();
    let label = Distance::between_seconds(seconds).render(locale);
    let in_future = seconds < 0;

    match (locale, in_future) {
        (Locale::English, false) => format!("{} ago", label),
        (Locale::English, true) => format!("in {}", label),
        (Locale::Thai, false) => format!("{}ที่ผ่านมา", label),
        (Locale::Thai, true) => format!("ใน{}", label),
    }
}

/// Render relative to the current wall clock
pub fn format_relative_to_now<Tz: TimeZone>(instant: &DateTime<Tz>, locale: Locale) -> String {
    format_relative(instant, &Utc::now(), locale)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
