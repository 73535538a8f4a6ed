//! Attribute-safety predicate.

/// Whether `name` may be exposed as an attribute.
///
/// A name is attribute-safe when it starts with an ASCII letter, continues
/// with ASCII letters, digits or underscores only, and is not one of the
/// `reserved` names (the methods of the wrapper type being queried). Names
/// with a leading underscore are never attribute-safe.
///
/// # Examples
///
/// ```
/// use attr_map::is_attribute_safe;
///
/// assert!(is_attribute_safe("foo_1", &["get"]));
/// assert!(!is_attribute_safe("get", &["get"]));
/// assert!(!is_attribute_safe("_hidden", &[]));
/// assert!(!is_attribute_safe("1st", &[]));
/// ```
#[must_use]
pub fn is_attribute_safe(name: &str, reserved: &[&str]) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        && !reserved.contains(&name)
}
