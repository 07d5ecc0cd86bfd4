//! Tag list editing shared by the idea, note and profile forms

/// Append `tag` unless it is blank or already present
///
/// Returns whether the list changed.
pub fn add_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|existing| existing == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

/// Remove every occurrence of `tag` (trimmed); returns whether the list changed
pub fn remove_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    let before = tags.len();
    tags.retain(|existing| existing != tag);
    tags.len() != before
}

/// Add `tag` when absent, remove it when present
///
/// Returns whether the tag is selected afterwards.
pub fn toggle_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if remove_tag(tags, tag) {
        false
    } else {
        add_tag(tags, tag)
    }
}
