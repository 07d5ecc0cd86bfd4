//! Date ordering for query results
//!
//! Sorting always produces a new vector. Items without a readable date are
//! placed after every dated item, whichever direction is requested.

use super::record::{date_field, Record};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Sort direction for [`sort_by_date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first
    Ascending,

    /// Newest first
    #[default]
    Descending,
}

/// Return a copy of `items` ordered by the instant `date_of` extracts
///
/// The sort is stable: items with equal dates keep their input order, so
/// sorting an already sorted collection is a no-op.
pub fn sort_by_date<T, F>(items: &[T], date_of: F, order: SortOrder) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    // Extract each date once instead of on every comparison
    let mut keyed: Vec<(Option<DateTime<Utc>>, &T)> =
        items.iter().map(|item| (date_of(item), item)).collect();

    keyed.sort_by(|(a, _), (b, _)| compare_dates(a.as_ref(), b.as_ref(), order));

    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Sort records by a named date field
pub fn sort_records_by_date(records: &[Record], field: &str, order: SortOrder) -> Vec<Record> {
    sort_by_date(records, date_field(field), order)
}

fn compare_dates(
    a: Option<&DateTime<Utc>>,
    b: Option<&DateTime<Utc>>,
    order: SortOrder,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(b),
            SortOrder::Descending => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
