//! String normalization utilities.
//!
//! Player input is compared after trimming and lower-casing, both for name
//! matching and for autocomplete queries.

/// Trims surrounding whitespace and lower-cases the input.
///
/// # Examples
///
/// ```
/// use skeledle_domain::common::normalize;
///
/// assert_eq!(normalize("  Femur "), "femur");
/// assert_eq!(normalize("Phalanges (Hand)"), "phalanges (hand)");
/// ```
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Compares two names after normalizing both sides.
///
/// # Examples
///
/// ```
/// use skeledle_domain::common::names_match;
///
/// assert!(names_match("Thigh Bone", " thigh bone"));
/// assert!(!names_match("Femur", "Fibula"));
/// ```
pub fn names_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// Catalog files sometimes carry optional fields as empty strings.
///
/// # Examples
///
/// ```
/// use skeledle_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("hand_diagram.svg"), Some("hand_diagram.svg"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
