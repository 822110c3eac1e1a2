//! Numeric code generation

use rand::seq::SliceRandom;
use rand::Rng;

use sc_shared::config::MAX_CODE_LENGTH;

const DIGITS: &[u8; 10] = b"0123456789";

/// Produces fixed-length numeric codes
///
/// A pool of three copies of `0-9` is shuffled and its prefix taken, so a digit
/// appears at most three times in one code and lengths up to 30 are served.
/// Randomness comes from `thread_rng`; pass another source to
/// [`CodeGenerator::generate_with`] when a different generator is required.
#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Create a generator; `length` is clamped to `1..=30`
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(1, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn generate(&self) -> String {
        Self::generate_with(&mut rand::thread_rng(), self.length)
    }

    /// Generate `length` digits from the given random source
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
        let mut pool: Vec<u8> = DIGITS.repeat(MAX_CODE_LENGTH / DIGITS.len());
        pool.shuffle(rng);
        pool.truncate(length.min(MAX_CODE_LENGTH));

        pool.into_iter().map(char::from).collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(crate::domain::DEFAULT_CODE_LENGTH)
    }
}
