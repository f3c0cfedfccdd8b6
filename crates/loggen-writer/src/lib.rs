//! Log file writer for loggen.
//!
//! This crate creates the output file for a run and writes the generated
//! lines into it, one per line.
//!
//! File names are `<prefix><timestamp><extension>`, where the timestamp is
//! the local wall-clock time in RFC 3339 form with second precision. When a
//! file of that name already exists, `-1`, `-2`, ... is inserted before the
//! extension until a free name is found.
//!
//! # Example
//!
//! ```ignore
//! use loggen_writer::LogWriter;
//!
//! let writer = LogWriter::new(".", "loggen-", ".log");
//! let written = writer.write(&lines)?;
//! println!("wrote {}", written.path.display());
//! ```

mod error;
pub mod file_name;
mod writer;

pub use error::WriterError;
pub use file_name::{build_file_name, file_name_timestamp, MAX_NAME_ATTEMPTS};
pub use writer::{read_lines, LogWriter, WriteMetrics, WrittenLog};
