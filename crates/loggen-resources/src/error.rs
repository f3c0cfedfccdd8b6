//! Error types for resource loading.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the three resource files an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ClassNames,
    MethodNames,
    Messages,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::ClassNames => "class names",
            ResourceKind::MethodNames => "method names",
            ResourceKind::Messages => "messages",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while loading resources.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A resource file could not be opened or read.
    #[error("Failed to read {kind} file '{}': {source}", .path.display())]
    Read {
        kind: ResourceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A resource file parsed to an empty sequence.
    #[error("The {resource} resource is empty (source: '{path}')")]
    Empty { resource: ResourceKind, path: String },

    /// The resource configuration file could not be read.
    #[error("Failed to read resource config: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The resource configuration file is not valid YAML.
    #[error("Failed to parse resource config: {0}")]
    Config(#[from] serde_yaml::Error),
}
