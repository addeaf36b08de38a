//! Name comparison for client-side sorting

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case- and accent-folded form of a name
fn fold(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two display names the way a reader expects in a directory.
///
/// Case and diacritics are ignored first; exact text breaks ties so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
        assert_eq!(compare_names("Bob", "alice"), Ordering::Greater);
    }

    #[test]
    fn test_accents_fold() {
        assert_eq!(compare_names("Émile", "Eve"), Ordering::Less);
        assert_eq!(compare_names("Zoë", "Zoe Adams"), Ordering::Less);
    }

    #[test]
    fn test_ties_are_total() {
        assert_ne!(compare_names("ann", "Ann"), Ordering::Equal);
    }
}
