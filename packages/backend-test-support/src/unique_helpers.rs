//! Test helpers for generating unique test data
//!
//! Category titles are unique in the store, so tests that create categories
//! against a shared database should derive titles from these helpers.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("category");
/// let id2 = unique_str("category");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("category-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique, human-looking category title.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_title;
///
/// let title = unique_title("Potent Potables");
/// assert!(title.starts_with("Potent Potables #"));
/// ```
pub fn unique_title(base: &str) -> String {
    format!("{} #{}", base, Ulid::new())
}
