//! Log line generator for loggen.
//!
//! This crate provides the [`LineGenerator`], which composes synthetic log
//! lines from a [`ResourceSet`](loggen_resources::ResourceSet). The generator
//! owns a single seeded RNG, so the same seed and the same resources always
//! produce the same lines.
//!
//! # Line format
//!
//! ```text
//! [YYYY-MM-DDThh:mm:ss.mmmZ] LEVEL - Class.method: message
//! ```
//!
//! # Architecture
//!
//! ```text
//! ResourceSet
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  LineGenerator  │
//! │                 │
//! │  - seed         │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │
//!          ▼
//!   String (one log line)
//! ```
//!
//! # Example
//!
//! ```rust
//! use loggen_generator::LineGenerator;
//! use loggen_resources::ResourceSet;
//!
//! let resources = ResourceSet::new(
//!     vec!["OrderService".to_string()],
//!     vec!["submit".to_string()],
//!     vec!["order accepted".to_string()],
//! ).unwrap();
//!
//! let mut generator = LineGenerator::new(&resources, 42);
//! let line = generator.next_line().unwrap();
//! assert!(line.ends_with("OrderService.submit: order accepted"));
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, LineGenerator, LineIterator};
pub use generators::level::LogLevel;
pub use generators::timestamp::SyntheticTimestamp;
