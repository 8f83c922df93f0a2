//! Ordered registry of configuration locations.

use std::fmt;

/// Locations supplied by the operator, in the order given.
///
/// Order defines precedence: later locations override earlier ones for
/// conflicting keys. Duplicates are kept and fetched independently; scheme
/// validation happens at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLocations {
    entries: Vec<String>,
}

impl ConfigLocations {
    /// Create an empty location registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location.
    pub fn add(&mut self, location: impl Into<String>) {
        self.entries.push(location.into());
    }

    /// All locations in insertion order.
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ConfigLocations {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ConfigLocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.entries.join(", "))
    }
}

/// Split a location into `(scheme, locator)`.
///
/// The scheme is everything before the first `:` and must start with an
/// ASCII letter followed by letters, digits, `+`, `-` or `.`. Returns `None`
/// when the location has no valid scheme prefix.
pub fn split_scheme(location: &str) -> Option<(&str, &str)> {
    let (scheme, locator) = location.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, locator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut locations = ConfigLocations::new();
        locations.add("file:b.yaml");
        locations.add("file:a.yaml");
        locations.add("file:b.yaml");
        assert_eq!(
            locations.all(),
            ["file:b.yaml", "file:a.yaml", "file:b.yaml"]
        );
        assert_eq!(locations.to_string(), "[file:b.yaml, file:a.yaml, file:b.yaml]");
    }

    #[test]
    fn splits_on_first_colon() {
        assert_eq!(split_scheme("file:/etc/a.yaml"), Some(("file", "/etc/a.yaml")));
        assert_eq!(
            split_scheme("https://example.com:8443/cfg"),
            Some(("https", "//example.com:8443/cfg"))
        );
        assert_eq!(
            split_scheme("inline-literal:a::b: [x, y]"),
            Some(("inline-literal", "a::b: [x, y]"))
        );
    }

    #[test]
    fn rejects_missing_or_invalid_scheme() {
        assert_eq!(split_scheme("config.yaml"), None);
        assert_eq!(split_scheme(":nothing"), None);
        assert_eq!(split_scheme("1file:x"), None);
        assert_eq!(split_scheme("fi le:x"), None);
    }
}
