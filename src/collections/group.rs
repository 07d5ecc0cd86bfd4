//! Partitioning a collection into keyed buckets

use std::collections::HashMap;
use std::hash::Hash;

/// Buckets produced by [`group_by`]
///
/// Buckets are listed in the order their key was first seen, and each bucket
/// keeps its items in input order.
#[derive(Debug, Clone)]
pub struct Groups<K, T> {
    index: HashMap<K, usize>,
    buckets: Vec<(K, Vec<T>)>,
}

impl<K, T> Groups<K, T>
where
    K: Hash + Eq + Clone,
{
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    fn push(&mut self, key: K, item: T) {
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].1.push(item),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![item]));
            }
        }
    }

    /// Items for `key`
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.index
            .get(key)
            .map(|&slot| self.buckets[slot].1.as_slice())
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().map(|(key, _)| key)
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.buckets
            .iter()
            .map(|(key, items)| (key, items.as_slice()))
    }

    /// Total items across all buckets
    pub fn total_items(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }

    /// Consume into the ordered bucket list
    pub fn into_buckets(self) -> Vec<(K, Vec<T>)> {
        self.buckets
    }
}

/// Partition `items` by the key `key_of` extracts
pub fn group_by<T, K, F>(items: &[T], key_of: F) -> Groups<K, T>
where
    T: Clone,
    K: Hash + Eq + Clone,
    F: Fn(&T) -> K,
{
    let mut groups = Groups::new();
    for item in items {
        groups.push(key_of(item), item.clone());
    }
    groups
}
