//! In-memory vocabulary used for line generation.

use crate::config::ResourceConfig;
use crate::error::{ResourceError, ResourceKind};
use crate::parse::{parse_csv_words, parse_lines};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The three vocabularies loggen draws from.
///
/// Construction validates that every sequence is non-empty; there is no way
/// to obtain a `ResourceSet` with an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    class_names: Vec<String>,
    method_names: Vec<String>,
    messages: Vec<String>,
}

impl ResourceSet {
    /// Build a set from already-parsed sequences.
    pub fn new(
        class_names: Vec<String>,
        method_names: Vec<String>,
        messages: Vec<String>,
    ) -> Result<Self, ResourceError> {
        ensure_non_empty(ResourceKind::ClassNames, &class_names, "in-memory")?;
        ensure_non_empty(ResourceKind::MethodNames, &method_names, "in-memory")?;
        ensure_non_empty(ResourceKind::Messages, &messages, "in-memory")?;

        Ok(Self {
            class_names,
            method_names,
            messages,
        })
    }

    /// Read and parse the three resource files named by `config`.
    ///
    /// Each file is read in full and closed before the next one is opened.
    pub fn load(config: &ResourceConfig) -> Result<Self, ResourceError> {
        info!("Loading resources from '{}'", config.dir.display());

        let class_names = load_resource(
            ResourceKind::ClassNames,
            &config.class_names_path(),
            parse_csv_words,
        )?;
        let method_names = load_resource(
            ResourceKind::MethodNames,
            &config.method_names_path(),
            parse_csv_words,
        )?;
        let messages = load_resource(
            ResourceKind::Messages,
            &config.messages_path(),
            parse_lines,
        )?;

        info!(
            "Loaded {} class names, {} method names, {} messages",
            class_names.len(),
            method_names.len(),
            messages.len()
        );

        Ok(Self {
            class_names,
            method_names,
            messages,
        })
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn method_names(&self) -> &[String] {
        &self.method_names
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

fn load_resource(
    kind: ResourceKind,
    path: &Path,
    parse: fn(&str) -> Vec<String>,
) -> Result<Vec<String>, ResourceError> {
    let content = fs::read_to_string(path).map_err(|source| ResourceError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse(&content);
    debug!(
        "Parsed {} {} from '{}'",
        entries.len(),
        kind,
        path.display()
    );

    ensure_non_empty(kind, &entries, &path.display().to_string())?;
    Ok(entries)
}

fn ensure_non_empty(
    resource: ResourceKind,
    entries: &[String],
    path: &str,
) -> Result<(), ResourceError> {
    if entries.is_empty() {
        return Err(ResourceError::Empty {
            resource,
            path: path.to_string(),
        });
    }
    Ok(())
}
