//! Main generator for producing log lines.

use crate::generators::choice::pick;
use crate::generators::level::LogLevel;
use crate::generators::timestamp::SyntheticTimestamp;
use loggen_resources::ResourceSet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A vocabulary had nothing to pick from
    #[error("Cannot pick from an empty resource sequence")]
    EmptySource,
}

/// Generator that produces log lines from a resource set.
///
/// All randomness comes from one `StdRng` seeded at construction, so two
/// generators built with the same seed over the same resources produce
/// identical lines.
pub struct LineGenerator<'r> {
    /// Vocabulary to draw class, method and message from
    resources: &'r ResourceSet,
    /// Seed the RNG was created from
    seed: u64,
    /// Seeded random number generator, shared by every draw
    rng: StdRng,
}

impl<'r> LineGenerator<'r> {
    /// Create a new line generator over `resources` with the given seed.
    pub fn new(resources: &'r ResourceSet, seed: u64) -> Self {
        Self {
            resources,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator with a freshly drawn random seed.
    ///
    /// The seed is available from [`LineGenerator::seed`] so a run can be
    /// reproduced later.
    pub fn from_entropy(resources: &'r ResourceSet) -> Self {
        let seed = rand::random();
        debug!("Drew random seed {seed}");
        Self::new(resources, seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the next log line.
    ///
    /// Draw order is timestamp, level, class, method, message.
    pub fn next_line(&mut self) -> Result<String, GeneratorError> {
        let timestamp = SyntheticTimestamp::random(&mut self.rng);
        let level = LogLevel::random(&mut self.rng);
        let class_name = pick(&mut self.rng, self.resources.class_names())?;
        let method_name = pick(&mut self.rng, self.resources.method_names())?;
        let message = pick(&mut self.rng, self.resources.messages())?;

        Ok(format!(
            "[{timestamp}] {level} - {class_name}.{method_name}: {message}"
        ))
    }

    /// Generate `count` lines.
    ///
    /// Returns an iterator that lazily generates lines.
    pub fn lines(&mut self, count: u64) -> LineIterator<'_, 'r> {
        debug!("Generating {count} lines (seed={})", self.seed);
        LineIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates log lines.
pub struct LineIterator<'g, 'r> {
    generator: &'g mut LineGenerator<'r>,
    remaining: u64,
}

impl Iterator for LineIterator<'_, '_> {
    type Item = Result<String, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_line())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineIterator<'_, '_> {}
