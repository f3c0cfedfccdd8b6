//! Uniform selection from a vocabulary.

use crate::generator::GeneratorError;
use rand::Rng;

/// Pick one entry uniformly at random.
///
/// Returns [`GeneratorError::EmptySource`] rather than panicking when
/// `source` is empty.
pub fn pick<'a, R: Rng>(rng: &mut R, source: &'a [String]) -> Result<&'a str, GeneratorError> {
    if source.is_empty() {
        return Err(GeneratorError::EmptySource);
    }
    let idx = rng.random_range(0..source.len());
    Ok(&source[idx])
}
