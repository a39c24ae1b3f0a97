//! Random password generation.

use clusterpw_types::PasswordPolicy;
use rand::{thread_rng, Rng};

/// Characters a password is drawn from: digits, upper and lower case
/// letters, `#`..=`&` and `:`..=`?`.
pub const ALPHABET: &[u8; 72] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%&:;<=>?";

/// Whether `c` belongs to [`ALPHABET`].
pub fn in_alphabet(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

/// Password generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator {
    policy: PasswordPolicy,
}

impl PasswordGenerator {
    /// Create a generator for a policy.
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// The policy in use.
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Generate a password from the thread-local random source.
    pub fn generate(&self) -> String {
        self.generate_with(&mut thread_rng())
    }

    /// Generate a password from the given random source.
    ///
    /// Each character is picked uniformly and independently from
    /// [`ALPHABET`].
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.policy.output_len())
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
