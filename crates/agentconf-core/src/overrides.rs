//! Collection of `path=value` overrides.

use crate::error::MalformedOverride;

/// A single collected `path=value` assignment.
///
/// The raw text is kept verbatim; translation happens later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    raw: String,
    position: usize,
    /// Byte offset of the first `=`.
    separator: usize,
}

impl Override {
    /// Parse a raw assignment collected at `position`.
    ///
    /// Splits on the first `=`, so values may themselves contain `=`.
    pub fn parse(raw: &str, position: usize) -> Result<Self, MalformedOverride> {
        let separator = raw
            .find('=')
            .ok_or_else(|| MalformedOverride::MissingSeparator {
                raw: raw.to_string(),
            })?;
        let key = raw[..separator].trim();
        if key.is_empty() {
            return Err(MalformedOverride::EmptyKey {
                raw: raw.to_string(),
            });
        }
        if key.split('.').any(str::is_empty) {
            return Err(MalformedOverride::EmptySegment {
                raw: raw.to_string(),
                key: key.to_string(),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
            position,
            separator,
        })
    }

    /// The assignment exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Zero-based position in collection order.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Trimmed dotted path.
    pub fn key(&self) -> &str {
        self.raw[..self.separator].trim()
    }

    /// Trimmed, unparsed value text.
    pub fn value_text(&self) -> &str {
        self.raw[self.separator + 1..].trim()
    }

    /// Dotted path split into segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.key().split('.')
    }
}

/// Overrides in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideCollector {
    entries: Vec<Override>,
}

impl OverrideCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and append a raw `path=value` assignment.
    pub fn add(&mut self, raw: &str) -> Result<&Override, MalformedOverride> {
        let parsed = Override::parse(raw, self.entries.len())?;
        self.entries.push(parsed);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Append an already parsed override, stamping it with the next position.
    pub fn push(&mut self, mut entry: Override) {
        entry.position = self.entries.len();
        self.entries.push(entry);
    }

    /// All overrides in collection order.
    pub fn all(&self) -> &[Override] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_in_order_with_positions() {
        let mut collector = OverrideCollector::new();
        collector.add("a.b=1").expect("first");
        collector.add(" c = two words ").expect("second");

        let all = collector.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].position(), 0);
        assert_eq!(all[1].position(), 1);
        assert_eq!(all[1].raw(), " c = two words ");
        assert_eq!(all[1].key(), "c");
        assert_eq!(all[1].value_text(), "two words");
    }

    #[test]
    fn push_restamps_positions() {
        let mut collector = OverrideCollector::new();
        collector.push(Override::parse("a=1", 5).expect("parse"));
        collector.push(Override::parse("b=2", 0).expect("parse"));
        let positions: Vec<usize> = collector.all().iter().map(Override::position).collect();
        assert_eq!(positions, [0, 1]);
    }

    #[test]
    fn splits_on_first_equal_sign() {
        let parsed = Override::parse("exporters.http.endpoint=http://h/?a=b", 0).expect("parse");
        assert_eq!(parsed.key(), "exporters.http.endpoint");
        assert_eq!(parsed.value_text(), "http://h/?a=b");
        assert_eq!(
            parsed.segments().collect::<Vec<_>>(),
            ["exporters", "http", "endpoint"]
        );
    }

    #[test]
    fn missing_equal_sign_is_rejected() {
        let mut collector = OverrideCollector::new();
        let err = collector.add("key:name").unwrap_err();
        assert_eq!(
            err,
            MalformedOverride::MissingSeparator {
                raw: "key:name".to_string()
            }
        );
        assert_eq!(err.to_string(), "missing equal sign");
        assert!(collector.is_empty());
    }

    #[test]
    fn empty_keys_and_segments_are_rejected() {
        assert!(matches!(
            Override::parse(" =v", 0),
            Err(MalformedOverride::EmptyKey { .. })
        ));
        for raw in ["a..b=v", ".a=v", "a.=v"] {
            let err = Override::parse(raw, 0).unwrap_err();
            assert!(matches!(err, MalformedOverride::EmptySegment { .. }), "{raw}");
            assert_eq!(err.raw(), raw);
        }
    }

    #[test]
    fn empty_value_is_allowed() {
        let parsed = Override::parse("key=", 0).expect("parse");
        assert_eq!(parsed.value_text(), "");
    }
}
