//! Run configuration.

mod normalize;

pub use normalize::{normalize_extension, normalize_prefix};

/// The resolved extension, prefix and count for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Output file extension, always starting with `.`
    pub extension: String,
    /// Output file name prefix, always ending with `-` or `_`
    pub prefix: String,
    /// Number of lines to generate
    pub count: u64,
}

impl RunConfig {
    /// Build a run configuration, normalizing extension and prefix.
    pub fn new(extension: &str, prefix: &str, count: u64) -> Self {
        Self {
            extension: normalize_extension(extension),
            prefix: normalize_prefix(prefix),
            count,
        }
    }
}
