//! Configuration management for `assetline.toml`.
//!
//! # Sections
//!
//! | Section              | Purpose                                    |
//! |----------------------|--------------------------------------------|
//! | `[assets]`           | Asset root directory and environment name  |
//! | `[compilers.stylus]` | Stylus CLI command                         |
//! | `[compilers.coffee]` | CoffeeScript CLI command                   |
//! | `[compilers.es6]`    | babel CLI command and browserslist targets |
//! | `[serve]`            | HTTP server (interface, port, workers)     |
//!
//! The file is optional: without one, every section takes its defaults
//! relative to the current directory.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{AssetsConfig, CompilersConfig, ServeConfig};

use crate::asset::AssetPipeline;
use crate::cli::{Cli, Commands, PipelineArgs};
use crate::core::Environment;
use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Environment variable consulted when no environment is configured.
pub const ENV_VAR: &str = "ASSETLINE_ENV";

/// Root configuration structure representing assetline.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory: parent of config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Resolved environment (internal use only)
    #[serde(skip)]
    pub env: Environment,

    pub assets: AssetsConfig,
    pub compilers: CompilersConfig,
    pub serve: ServeConfig,
}

impl AppConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. Missing file means
    /// defaults rooted at cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.clone());
                config.config_path = Some(path);
                config
            }
            None => Self {
                root: cwd,
                ..Self::default()
            },
        };

        config.finalize(cli, std::env::var(ENV_VAR).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Apply CLI overrides, resolve the environment and absolute paths.
    ///
    /// Environment precedence: `--env` > `[assets] env` > `env_var`.
    fn finalize(&mut self, cli: &Cli, env_var: Option<String>) {
        let args = cli.pipeline_args();
        crate::logger::set_verbose(args.verbose);

        self.apply_pipeline_args(args);
        if let Commands::Serve {
            interface, port, ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }

        let name = self.assets.env.clone().or(env_var);
        self.env = Environment::from_optional(name.as_deref());

        self.assets.root = crate::utils::path::resolve_from(&self.assets.root, &self.root);
    }

    fn apply_pipeline_args(&mut self, args: &PipelineArgs) {
        Self::update_option(&mut self.assets.root, args.root.as_ref());
        if args.env.is_some() {
            self.assets.env = args.env.clone();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate the finalized configuration, reporting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let root = &self.assets.root;
        if !root.exists() {
            errors.push(format!("assets.root not found: {}", root.display()));
        } else if !root.is_dir() {
            errors.push(format!("assets.root is not a directory: {}", root.display()));
        }

        self.compilers.validate(&mut errors);

        if self.serve.workers == 0 {
            errors.push("serve.workers must be at least 1".into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    /// Build the asset pipeline described by this configuration.
    pub fn pipeline(&self) -> AssetPipeline {
        AssetPipeline::new(self.env.clone(), &self.assets.root, self.compilers.build())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AppConfig {
    let (parsed, ignored) = AppConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("assetline").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = AppConfig::parse_with_ignored("[assets\nroot = \"x\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[assets]\nroot = \"public\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = AppConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.assets.root, PathBuf::from("public"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_env_precedence() {
        let mut config = test_parse_config("[assets]\nenv = \"test\"");
        config.finalize(&cli(&["check", "--env", "development"]), Some("staging".into()));
        assert_eq!(config.env, Environment::Development);

        let mut config = test_parse_config("[assets]\nenv = \"test\"");
        config.finalize(&cli(&["check"]), Some("staging".into()));
        assert_eq!(config.env, Environment::Test);

        let mut config = test_parse_config("");
        config.finalize(&cli(&["check"]), Some("staging".into()));
        assert_eq!(config.env, Environment::Other("staging".into()));

        let mut config = test_parse_config("");
        config.finalize(&cli(&["check"]), None);
        assert_eq!(config.env, Environment::Production);
    }

    #[test]
    fn test_root_resolution_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("public/assets")).unwrap();

        let mut config = test_parse_config("[assets]\nroot = \"assets\"");
        config.root = dir.path().to_path_buf();
        config.finalize(
            &cli(&["serve", "--root", "public/assets", "-p", "9000", "-i", "0.0.0.0"]),
            None,
        );

        assert_eq!(
            config.assets.root,
            dir.path().join("public/assets").canonicalize().unwrap()
        );
        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.serve.interface.to_string(), "0.0.0.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("");
        config.root = dir.path().to_path_buf();
        config.finalize(&cli(&["check"]), None);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("assets.root not found"));
    }

    #[test]
    fn test_pipeline_from_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/stylesheets")).unwrap();
        fs::write(dir.path().join("assets/stylesheets/app.css"), "a{}").unwrap();

        let mut config = test_parse_config("");
        config.root = dir.path().to_path_buf();
        config.finalize(&cli(&["fetch", "app.css", "--env", "test"]), None);

        let pipeline = config.pipeline();
        assert_eq!(pipeline.env(), &Environment::Test);
        assert_eq!(pipeline.fetch("app.css").unwrap(), "a{}");
    }
}
