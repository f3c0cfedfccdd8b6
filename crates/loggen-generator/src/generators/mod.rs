//! Generators for the individual parts of a log line.

pub mod choice;
pub mod level;
pub mod timestamp;
