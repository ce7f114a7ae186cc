//! Synthetic value generation
//!
//! Fresh synthetic values for originals not yet in the mapping store.
//! Free-text replacements come from the `fake` crate by role; identifier
//! replacements are `<CLASS_TAG>_<sequence>` tokens, with a bounded
//! SHA-256-derived fallback for columns without a declared class.

use crate::anonymization::roles::FreeTextRole;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

/// Suffix appended to facility-role company names
const FACILITY_SUFFIX: &str = " Manufacturing";

/// Class tag recorded for hash-fallback identifiers
pub const FALLBACK_CLASS_TAG: &str = "OTHER";

/// Generator for fresh synthetic free-text values
///
/// Uses `StdRng` (Send + Sync) so the generator can live inside the engine.
/// Freshly drawn values are random per run; determinism across runs comes
/// from the mapping store, not from the generator.
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Create a generator seeded from entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed (tests)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a synthetic replacement for a free-text role
    pub fn free_text(&mut self, role: FreeTextRole) -> String {
        match role {
            FreeTextRole::Organization => CompanyName().fake_with_rng(&mut self.rng),
            FreeTextRole::Facility => {
                let company: String = CompanyName().fake_with_rng(&mut self.rng);
                format!("{company}{FACILITY_SUFFIX}")
            }
            FreeTextRole::Person => Name().fake_with_rng(&mut self.rng),
            FreeTextRole::Generic => {
                let word: String = Word().fake_with_rng(&mut self.rng);
                capitalize(&word)
            }
        }
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a sequential identifier token: class tag plus zero-padded sequence
pub fn format_identifier(class_tag: &str, sequence: u64, width: usize) -> String {
    format!("{class_tag}_{sequence:0width$}")
}

/// Derive a bounded fallback token from the original value
///
/// Not collision-free: the token space is bounded at one million values by
/// design, matching the sequential tokens' width. Documented limitation for
/// unanticipated identifier columns.
pub fn hash_token(original: &str) -> String {
    let digest = Sha256::digest(original.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let bounded = u64::from_be_bytes(prefix) % 1_000_000;
    format!("FAKE_{bounded:06}")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
