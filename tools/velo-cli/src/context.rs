//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use velo_commerce::prelude::*;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["velo.toml", ".velo.toml", "velo.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config_path, config)),
                        Err(e) => tracing::warn!(path = %config_path.display(), "skipping config: {:#}", e),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the catalog: the configured JSON file, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.config.store.catalog_path else {
            return Ok(Catalog::sample());
        };

        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&content)
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;

        self.output.debug(&format!(
            "Loaded {} products from {}",
            catalog.products().len(),
            path.display()
        ));
        Ok(catalog)
    }

    /// A fresh session with an empty cart and the configured pricing.
    pub fn session(&self) -> Result<StorefrontSession> {
        Ok(StorefrontSession::new(self.catalog()?).with_pricing(self.config.pricing.policy()))
    }

    /// Resolve a path relative to the config file's directory, or the
    /// working directory when no config file was used.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            return PathBuf::from(path);
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| self.cwd.join(dir))
            .unwrap_or_else(|| self.cwd.clone());
        base.join(path)
    }
}
