//! Identifier sanitation shared by every inbound boundary.

/// Sanitize a list of category or item identifiers.
///
/// Drops non-positive ids, collapses duplicates, and returns the result
/// ascending so downstream comparisons are stable. Idempotent: feeding
/// the output back in returns it unchanged.
pub fn sanitize_ids(ids: &[i64]) -> Vec<i64> {
    let mut clean: Vec<i64> = ids.iter().copied().filter(|&id| id > 0).collect();
    clean.sort_unstable();
    clean.dedup();
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_positive_ids() {
        assert_eq!(sanitize_ids(&[3, 0, -1, 5, -7]), vec![3, 5]);
    }

    #[test]
    fn collapses_duplicates() {
        assert_eq!(sanitize_ids(&[5, 3, 5, 3, 5]), vec![3, 5]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize_ids(&[]), Vec::<i64>::new());
        assert_eq!(sanitize_ids(&[0, -2]), Vec::<i64>::new());
    }

    #[test]
    fn idempotent() {
        let once = sanitize_ids(&[9, 2, 2, -4, 9, 0]);
        let twice = sanitize_ids(&once);
        assert_eq!(once, twice);
    }
}
