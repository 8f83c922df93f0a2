//! Command-line flags selecting configuration sources.

use agentconf_core::{ConfigLocations, MalformedOverride, Override, OverrideCollector, translate};
use clap::Args;

/// Flag naming one configuration location.
pub const CONFIG_FLAG: &str = "otelconfig";
/// Flag carrying one `path=value` override.
pub const SET_FLAG: &str = "set";
/// Flag passed through to the feature-gate registry.
pub const FEATURE_GATES_FLAG: &str = "feature-gates";

/// Configuration flags, meant to be flattened into a host CLI.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigFlags {
    /// Location of a config source; only one location per flag, e.g.
    /// `--otelconfig=file:/path/to/first --otelconfig=file:path/to/second`
    #[arg(long = CONFIG_FLAG, value_name = "LOCATION")]
    locations: Vec<String>,
    /// Set a config property. Takes precedence over every location; sequences
    /// are replaced and mappings are joined, e.g. `--set=processors.batch.timeout=2s`
    #[arg(long = SET_FLAG, value_name = "PATH=VALUE", value_parser = parse_set)]
    sets: Vec<Override>,
    /// Feature gate identifiers, passed through uninterpreted
    #[arg(long = FEATURE_GATES_FLAG, value_name = "GATES")]
    feature_gates: Option<String>,
}

fn parse_set(raw: &str) -> Result<Override, MalformedOverride> {
    Override::parse(raw, 0)
}

impl ConfigFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location, as one `--otelconfig` occurrence would.
    pub fn add_location(&mut self, location: impl Into<String>) {
        self.locations.push(location.into());
    }

    /// Append an override, as one `--set` occurrence would.
    pub fn add_set(&mut self, raw: &str) -> Result<(), MalformedOverride> {
        self.sets.push(parse_set(raw)?);
        Ok(())
    }

    /// Whether neither locations nor overrides were given.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.sets.is_empty()
    }

    /// Locations in the order given.
    pub fn locations(&self) -> ConfigLocations {
        self.locations.iter().cloned().collect()
    }

    /// Overrides in the order given.
    pub fn overrides(&self) -> OverrideCollector {
        let mut collector = OverrideCollector::new();
        for entry in &self.sets {
            collector.push(entry.clone());
        }
        collector
    }

    /// Locations followed by overrides translated to `inline-literal:` form.
    ///
    /// Consumers re-apply precedence by sequence order alone, so overrides
    /// always come last.
    pub fn override_and_location_strings(&self) -> Vec<String> {
        self.locations
            .iter()
            .cloned()
            .chain(self.overrides().all().iter().map(|entry| translate(entry).location()))
            .collect()
    }

    /// Raw `--feature-gates` value, if the flag was given.
    pub fn feature_gates(&self) -> Option<&str> {
        self.feature_gates.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        flags: ConfigFlags,
    }

    fn parse(args: &[&str]) -> Result<ConfigFlags, clap::Error> {
        TestCli::try_parse_from(std::iter::once("agentconf").chain(args.iter().copied()))
            .map(|cli| cli.flags)
    }

    #[test]
    fn set_flags_translate_to_inline_locations() {
        let cases: &[(&str, &[&str], &[&str])] = &[
            ("simple set", &["--set=key=value"], &["inline-literal:key: value"]),
            (
                "complex nested key",
                &["--set=outer.inner=value"],
                &["inline-literal:outer::inner: value"],
            ),
            ("set array", &["--set=key=[a, b, c]"], &["inline-literal:key: [a, b, c]"]),
            ("set map", &["--set=key={a: c}"], &["inline-literal:key: {a: c}"]),
            (
                "set and config",
                &["--set=key=value", "--otelconfig=file:testdata/otelcol-nop.yaml"],
                &["file:testdata/otelcol-nop.yaml", "inline-literal:key: value"],
            ),
            (
                "config and set",
                &["--otelconfig=file:testdata/otelcol-nop.yaml", "--set=key=value"],
                &["file:testdata/otelcol-nop.yaml", "inline-literal:key: value"],
            ),
        ];
        for (name, args, expected) in cases {
            let flags = parse(args).expect(name);
            assert_eq!(flags.override_and_location_strings(), *expected, "{name}");
        }
    }

    #[test]
    fn invalid_set_rejects_parse() {
        let err = parse(&["--set=key:name"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        let message = err.to_string();
        assert!(message.contains("'key:name'"), "{message}");
        assert!(message.contains("--set"), "{message}");
        assert!(message.contains("missing equal sign"), "{message}");
    }

    #[test]
    fn empty_flags_yield_nothing() {
        let flags = parse(&[]).expect("parse");
        assert!(flags.is_empty());
        assert!(flags.override_and_location_strings().is_empty());
        assert_eq!(flags.feature_gates(), None);
    }

    #[test]
    fn locations_keep_order_and_duplicates() {
        let flags = parse(&[
            "--otelconfig=file:b.yaml",
            "--otelconfig",
            "file:a.yaml",
            "--otelconfig=file:b.yaml",
        ])
        .expect("parse");
        assert_eq!(
            flags.locations().all(),
            ["file:b.yaml", "file:a.yaml", "file:b.yaml"]
        );
    }

    #[test]
    fn overrides_keep_collection_order() {
        let flags = parse(&["--set=a=1", "--set=b.c=2", "--set=a=3"]).expect("parse");
        let overrides = flags.overrides();
        let raws: Vec<&str> = overrides.all().iter().map(|entry| entry.raw()).collect();
        assert_eq!(raws, ["a=1", "b.c=2", "a=3"]);
        assert_eq!(overrides.all()[2].position(), 2);
    }

    #[test]
    fn feature_gates_pass_through() {
        let flags = parse(&["--feature-gates=+exporter.beta,-receiver.alpha"]).expect("parse");
        assert_eq!(flags.feature_gates(), Some("+exporter.beta,-receiver.alpha"));
    }

    #[test]
    fn programmatic_flags_match_parsed_flags() {
        let mut flags = ConfigFlags::new();
        flags.add_location("file:testdata/a.yaml");
        flags.add_set("k=v").expect("set");
        assert!(matches!(
            flags.add_set("kv"),
            Err(MalformedOverride::MissingSeparator { .. })
        ));
        assert_eq!(
            flags.override_and_location_strings(),
            ["file:testdata/a.yaml", "inline-literal:k: v"]
        );
    }
}
