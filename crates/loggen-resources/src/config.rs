//! Resource file locations.

use crate::error::ResourceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory holding the resource files.
pub const DEFAULT_RESOURCES_DIR: &str = "resources";
/// Default comma-separated class names file.
pub const DEFAULT_CLASS_NAMES_FILE: &str = "class-names.csv";
/// Default comma-separated method names file.
pub const DEFAULT_METHOD_NAMES_FILE: &str = "method-names.csv";
/// Default newline-separated messages file.
pub const DEFAULT_MESSAGES_FILE: &str = "messages.txt";

/// Where the resource files live.
///
/// Every field has a default, so a YAML config only needs to name what it
/// overrides:
///
/// ```yaml
/// dir: /srv/loggen/vocab
/// messages: errors-only.txt
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    /// Directory the file names are resolved against.
    pub dir: PathBuf,
    /// Comma-separated class names.
    pub class_names: String,
    /// Comma-separated method names.
    pub method_names: String,
    /// Newline-separated messages.
    pub messages: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_RESOURCES_DIR),
            class_names: DEFAULT_CLASS_NAMES_FILE.to_string(),
            method_names: DEFAULT_METHOD_NAMES_FILE.to_string(),
            messages: DEFAULT_MESSAGES_FILE.to_string(),
        }
    }
}

impl ResourceConfig {
    /// Load a config from a YAML file.
    ///
    /// A relative `dir` inside the file is kept as written, i.e. resolved
    /// against the working directory rather than the config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ResourceError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Replace the resources directory.
    pub fn with_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn class_names_path(&self) -> PathBuf {
        self.dir.join(&self.class_names)
    }

    pub fn method_names_path(&self) -> PathBuf {
        self.dir.join(&self.method_names)
    }

    pub fn messages_path(&self) -> PathBuf {
        self.dir.join(&self.messages)
    }
}
