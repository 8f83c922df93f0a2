//! Resolve the agent's effective configuration and print it.

use agentconf::{ConfigFlags, ProviderSettings, default_resolver};
use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use log::info;
use std::time::Duration;

/// Output format for the merged configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

/// Command-line options for the resolver.
#[derive(Debug, Parser)]
#[command(name = "agentconf", version)]
struct Cli {
    #[command(flatten)]
    config: ConfigFlags,
    /// Timeout in seconds for http, https and s3 fetches
    #[arg(long, default_value_t = 10)]
    fetch_timeout_secs: u64,
    /// Base URL used instead of the AWS endpoint for s3 locations
    #[arg(long)]
    s3_endpoint: Option<String>,
    /// Output format for the merged configuration
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    output: OutputFormat,
}

impl Cli {
    fn provider_settings(&self) -> ProviderSettings {
        let settings = ProviderSettings::default()
            .with_http_timeout(Duration::from_secs(self.fetch_timeout_secs));
        match &self.s3_endpoint {
            Some(endpoint) => settings.with_s3_endpoint(endpoint.clone()),
            None => settings,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agentconf::init_logging();
    let cli = Cli::parse();
    if cli.config.is_empty() {
        bail!("at least one --otelconfig location or --set override must be provided");
    }
    if let Some(gates) = cli.config.feature_gates() {
        info!("feature gates requested (gates={gates})");
    }

    let resolver =
        default_resolver(&cli.provider_settings()).context("failed to set up scheme providers")?;
    let merged = resolver
        .resolve(&cli.config.locations(), &cli.config.overrides())
        .await
        .context("failed to resolve configuration")?;

    let rendered = match cli.output {
        OutputFormat::Yaml => merged
            .to_yaml_string()
            .context("failed to render yaml")?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&merged.into_value())
                .context("failed to render json")?;
            json.push('\n');
            json
        }
    };
    print!("{rendered}");
    Ok(())
}
