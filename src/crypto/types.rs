use crate::rings::RingPoly;
use crypto_bigint::U256;

/// RLWE ciphertext as an ordered list of polynomial parts.
///
/// Well-formed ciphertexts produced by [`encrypt`](crate::crypto::encrypt)
/// have exactly two parts `(c0, c1)` satisfying `c0 + c1·s ≡ m + p·e (mod Q)`.
/// The part list is kept general so that malformed shapes can be represented
/// and rejected explicitly by [`extract`](crate::crypto::extract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext<const DEGREE: usize> {
    parts: Vec<RingPoly<DEGREE>>,
}

impl<const DEGREE: usize> Ciphertext<DEGREE> {
    pub(crate) fn from_pair(c0: RingPoly<DEGREE>, c1: RingPoly<DEGREE>) -> Self {
        Self {
            parts: vec![c0, c1],
        }
    }

    /// Assembles a ciphertext from raw parts without shape validation;
    /// consumers validate the part count.
    pub fn from_parts(parts: Vec<RingPoly<DEGREE>>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[RingPoly<DEGREE>] {
        &self.parts
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

/// Ciphertext of a single plaintext coefficient in inner-product form.
///
/// Conceptually a polynomial of length `DEGREE + 1`: positions `0..DEGREE`
/// are `weights` and position `DEGREE` is `constant`. Decryption computes
/// `constant + Σ weights[i]·s[i]`, lifts the sum into `[-Q/2, Q/2)`, and
/// reduces mod `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCiphertext<const DEGREE: usize> {
    pub(crate) weights: [U256; DEGREE],
    pub(crate) constant: U256,
}

impl<const DEGREE: usize> ExtractedCiphertext<DEGREE> {
    pub fn weights(&self) -> &[U256; DEGREE] {
        &self.weights
    }

    pub fn constant(&self) -> U256 {
        self.constant
    }
}
