//! Resource loading for loggen.
//!
//! loggen composes log lines from three vocabulary files that live in a
//! resources directory:
//!
//! - `class-names.csv` - comma-separated class names
//! - `method-names.csv` - comma-separated method names
//! - `messages.txt` - one message per line
//!
//! The [`ResourceConfig`] names the directory and the files, and
//! [`ResourceSet::load`] reads them into memory. A [`ResourceSet`] that exists
//! always has three non-empty sequences, so downstream generation can pick
//! from it without bounds checks failing.
//!
//! # Example
//!
//! ```no_run
//! use loggen_resources::{ResourceConfig, ResourceSet};
//!
//! let config = ResourceConfig::default().with_dir("resources");
//! let resources = ResourceSet::load(&config)?;
//! println!("{} class names", resources.class_names().len());
//! # Ok::<(), loggen_resources::ResourceError>(())
//! ```

pub mod config;
mod error;
pub mod parse;
mod resource_set;

pub use config::ResourceConfig;
pub use error::{ResourceError, ResourceKind};
pub use parse::{parse_csv_words, parse_lines};
pub use resource_set::ResourceSet;
