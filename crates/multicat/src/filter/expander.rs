//! Nested-set descendant expansion.
//!
//! Pure logic over rows the category accessor already loaded; no store
//! access happens here, so every expansion property is checkable against
//! in-memory trees.

use crate::ids::sanitize_ids;
use crate::models::Category;

/// Expand `seeds` with their descendants from `categories`.
///
/// Seeds are sanitized first; invalid input shrinks the result, never
/// errors. With `include_descendants` unset the sanitized seeds come
/// back unchanged without scanning the tree. Otherwise a category
/// qualifies when its bounds lie strictly inside a seed's bounds and its
/// level exceeds that seed's own level by at most `max_depth` (unlimited
/// when `None`); each seed is its own depth zero-point.
///
/// Returns the union of sanitized seeds and qualifying descendants,
/// deduplicated, ascending. Seeds stay in the result even when absent
/// from `categories`.
pub fn expand(
    categories: &[Category],
    seeds: &[i64],
    include_descendants: bool,
    max_depth: Option<u32>,
) -> Vec<i64> {
    let seed_ids = sanitize_ids(seeds);

    if seed_ids.is_empty() || !include_descendants {
        return seed_ids;
    }

    let mut combined = seed_ids.clone();

    for seed_id in &seed_ids {
        let Some(seed) = categories.iter().find(|c| c.id == *seed_id) else {
            continue;
        };

        for candidate in categories {
            if !seed.contains(candidate) {
                continue;
            }

            if let Some(depth) = max_depth {
                if i64::from(candidate.level) > i64::from(seed.level) + i64::from(depth) {
                    continue;
                }
            }

            combined.push(candidate.id);
        }
    }

    combined.sort_unstable();
    combined.dedup();
    combined
}
