//! Reshaping of query results held in memory
//!
//! Every function takes the collection by reference plus an accessor that
//! pulls the relevant value out of an item, so the same code serves raw
//! JSON records and typed structs.

pub mod dedup;
pub mod group;
pub mod random;
pub mod record;
pub mod sort;
pub mod tags;

pub use dedup::remove_duplicates;
pub use group::{group_by, Groups};
pub use random::{get_random_element, get_random_element_with};
pub use record::{
    by_field, collection_from_json, date_field, deep_clone, field_date, field_key, is_empty,
    parse_date_value, Collection, FieldKey, Record,
};
pub use sort::{sort_by_date, sort_records_by_date, SortOrder};
pub use tags::{add_tag, remove_tag, toggle_tag};
