//! Command-line flags. Every flag overrides the matching config file value.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "custdesk", version, about = "Customer management dashboard")]
pub struct Cli {
    /// Config file (default: <config_dir>/custdesk/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "custdesk=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// TOML file with [[customers]] and [[statements]]
    #[arg(long, value_name = "PATH")]
    pub customers: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file and layer the flags on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load_from(&self.config_path())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if let Some(path) = &self.customers {
            config.data.customers_path = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "custdesk",
            "--config",
            "/tmp/c.toml",
            "--log-level",
            "debug",
            "--customers",
            "/tmp/data.toml",
        ])
        .unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/c.toml"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.customers, Some(PathBuf::from("/tmp/data.toml")));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn apply_overrides_only_given_flags() {
        let mut config = Config::default();
        let cli = Cli {
            log_level: Some("trace".into()),
            ..Cli::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.log.level, "trace");
        assert_eq!(config.log.file, None);
        assert_eq!(config.data.customers_path, None);
    }

    #[test]
    fn default_config_path_when_flag_missing() {
        assert_eq!(Cli::default().config_path(), Config::config_path());
    }
}
