//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Files searched, in order, when no `--config` is given
pub const CONFIG_CANDIDATES: [&str; 3] = [
    "nursery-locator.toml",
    ".nursery-locator.toml",
    ".config/nursery-locator.toml",
];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the first of
    /// [`CONFIG_CANDIDATES`] that exists is used, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(Path::new(".")),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };
        schema
            .validate()
            .context(format!("While validating {}", describe(config_path.as_deref())))?;

        tracing::debug!(path = %describe(config_path.as_deref()), "Configuration loaded");

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Resolve a data path from the config: relative paths are taken
    /// relative to the config file's directory, or the working directory
    /// when running on defaults.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        }
    }

    /// Resolved dataset path
    pub fn dataset_path(&self) -> PathBuf {
        self.resolve(&self.schema.data.dataset)
    }

    /// Resolved boundary path
    pub fn boundary_path(&self) -> PathBuf {
        self.resolve(&self.schema.data.boundary)
    }
}

fn describe(path: Option<&Path>) -> String {
    path.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string())
}

/// Find configuration file in standard locations
fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e))
            .with_source(e)
    })?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("In config file {}", path.display()))
}
