//! First-occurrence deduplication by key

use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first item for each distinct key, in input order
///
/// Applying it twice gives the same result as applying it once.
pub fn remove_duplicates<T, K, F>(items: &[T], key_of: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(key_of(item)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::record::{by_field, Record};
    use serde_json::json;

    fn members() -> Vec<Record> {
        let raw = json!([
            {"uid": "u1", "name": "Ploy"},
            {"uid": "u2", "name": "Nam"},
            {"uid": "u1", "name": "Ploy (again)"},
            {"name": "guest"},
            {"name": "guest 2"},
        ]);
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_keeps_first_occurrence() {
        let unique = remove_duplicates(&members(), by_field("uid"));
        let names: Vec<&str> = unique
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        // Records without the field share the missing key
        assert_eq!(names, vec!["Ploy", "Nam", "guest"]);
    }

    #[test]
    fn test_idempotent() {
        let once = remove_duplicates(&members(), by_field("uid"));
        let twice = remove_duplicates(&once, by_field("uid"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_plain_values() {
        let tags = vec!["math", "exam", "math", "notes", "exam"];
        assert_eq!(
            remove_duplicates(&tags, |t| *t),
            vec!["math", "exam", "notes"]
        );
    }
}
