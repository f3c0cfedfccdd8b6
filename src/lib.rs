//! loggen
//!
//! Generates mock log files for exercising log-processing tools.
//!
//! A run loads three vocabulary files (class names, method names, messages),
//! composes `count` lines of the form
//!
//! ```text
//! [1987-06-14T09:41:27.318Z] WARN - OrderService.persist: Payload failed validation
//! ```
//!
//! writes them to `<prefix><timestamp><extension>` and prints the file back.
//!
//! # Crates
//!
//! - `loggen_resources` - resource file loading
//! - `loggen_generator` - seeded line generation
//! - `loggen_writer` - output file creation and writing
//!
//! # CLI Usage
//!
//! ```bash
//! # 100 lines into ./loggen-<timestamp>.log
//! loggen
//!
//! # Legacy single-dash flags are accepted
//! loggen -ext=txt -prefix=data-log -count=250
//!
//! # Reproducible output from a custom vocabulary
//! loggen --resources-dir ./vocab --seed 42 --output-dir /tmp
//! ```

pub mod cli;
pub mod config;
mod run;

pub use cli::{rewrite_legacy_flags, Cli, ResourceOpts};
pub use config::RunConfig;
pub use run::{run, RunSummary};
