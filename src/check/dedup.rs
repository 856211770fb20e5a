//! Stable deduplication over full structural equality

use std::collections::HashSet;
use std::hash::Hash;

/// Removes repeated items, keeping the first occurrence and the original
/// relative order of everything else.
pub fn dedup<T>(items: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }

    result
}
