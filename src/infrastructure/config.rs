// Settings - Layered run configuration (defaults, file, environment, CLI)
use crate::presentation::cli::Cli;
use anyhow::Context;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "config.yml";
pub const DEFAULT_DEST_DIR: &str = "dashboards";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub config_file: PathBuf,
    pub dest_dir: PathBuf,
    pub noop: bool,
    pub verbose: bool,
}

/// Load settings from `templater.{toml,yaml,json}` in the working directory
/// and `TEMPLATER_*` environment variables, with command-line flags on top.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let sources = config::Config::builder()
        .add_source(config::File::with_name("templater").required(false))
        .add_source(config::Environment::with_prefix("TEMPLATER"));

    build_settings(sources, cli)
}

fn build_settings(sources: ConfigBuilder<DefaultState>, cli: &Cli) -> anyhow::Result<Settings> {
    let settings = sources
        .set_default("config_file", DEFAULT_CONFIG_FILE)?
        .set_default("dest_dir", DEFAULT_DEST_DIR)?
        .set_default("noop", false)?
        .set_default("verbose", false)?
        .set_override_option(
            "config_file",
            cli.config_file.as_ref().map(|p| p.display().to_string()),
        )?
        .set_override_option("dest_dir", cli.dest_dir.as_ref().map(|p| p.display().to_string()))?
        .set_override_option("noop", cli.noop.then_some(true))?
        .set_override_option("verbose", cli.verbose.then_some(true))?
        .build()
        .context("failed to assemble settings")?;

    settings
        .try_deserialize()
        .context("failed to deserialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["dashboard-templater"]);

        let settings = build_settings(config::Config::builder(), &cli).unwrap();

        assert_eq!(
            settings,
            Settings {
                config_file: PathBuf::from("config.yml"),
                dest_dir: PathBuf::from("dashboards"),
                noop: false,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_cli_overrides_sources() {
        let sources = config::Config::builder()
            .set_override("dest_dir", "/srv/from-file")
            .unwrap()
            .set_override("noop", true)
            .unwrap();
        let cli = Cli::parse_from(["dashboard-templater", "-d", "/srv/out", "-c", "site.yml"]);

        let settings = build_settings(sources, &cli).unwrap();

        assert_eq!(settings.dest_dir, PathBuf::from("/srv/out"));
        assert_eq!(settings.config_file, PathBuf::from("site.yml"));
        // an absent flag leaves the source's value alone
        assert!(settings.noop);
    }

    #[test]
    fn test_file_source() {
        let sources = config::Config::builder().add_source(config::File::from_str(
            "dest_dir = \"/var/lib/grafana/dashboards\"\nverbose = true\n",
            config::FileFormat::Toml,
        ));
        let cli = Cli::parse_from(["dashboard-templater"]);

        let settings = build_settings(sources, &cli).unwrap();

        assert_eq!(settings.dest_dir, PathBuf::from("/var/lib/grafana/dashboards"));
        assert!(settings.verbose);
    }
}
