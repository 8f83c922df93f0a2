//! Translation of overrides into inline-literal fragments.

use crate::overrides::Override;

/// Separator between path segments in structural keys.
///
/// Distinct from `.` so that segment names may contain dots.
pub const PATH_SEPARATOR: &str = "::";

/// Scheme of the synthetic fragments produced for overrides.
pub const INLINE_SCHEME: &str = "inline-literal";

/// An override rewritten as a single `path: value` entry.
///
/// The value text is carried through untouched; the structural parser decides
/// whether it is a scalar, sequence or mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedOverride {
    position: usize,
    path: String,
    value_text: String,
}

impl TranslatedOverride {
    /// Position of the source override in collection order.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Structural path, segments joined with [`PATH_SEPARATOR`].
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    /// Literal content for the structural parser: `path: value`.
    pub fn content(&self) -> String {
        format!("{}: {}", self.path, self.value_text)
    }

    /// Location string understood by the inline-literal provider.
    pub fn location(&self) -> String {
        format!("{INLINE_SCHEME}:{}", self.content())
    }
}

/// Translate a collected override.
pub fn translate(entry: &Override) -> TranslatedOverride {
    TranslatedOverride {
        position: entry.position(),
        path: entry.segments().collect::<Vec<_>>().join(PATH_SEPARATOR),
        value_text: entry.value_text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn location_for(raw: &str) -> String {
        let entry = Override::parse(raw, 0).expect("override");
        translate(&entry).location()
    }

    #[test]
    fn translates_flag_values() {
        let cases = [
            ("key=value", "inline-literal:key: value"),
            ("outer.inner=value", "inline-literal:outer::inner: value"),
            ("key=[a, b, c]", "inline-literal:key: [a, b, c]"),
            ("key={a: c}", "inline-literal:key: {a: c}"),
            (
                " processors.batch.timeout = 2s ",
                "inline-literal:processors::batch::timeout: 2s",
            ),
        ];
        for (raw, expected) in cases {
            assert_eq!(location_for(raw), expected, "{raw}");
        }
    }

    #[test]
    fn keeps_position() {
        let entry = Override::parse("a=b", 7).expect("override");
        let translated = translate(&entry);
        assert_eq!(translated.position(), 7);
        assert_eq!(translated.path(), "a");
        assert_eq!(translated.value_text(), "b");
        assert_eq!(translated.content(), "a: b");
    }
}
