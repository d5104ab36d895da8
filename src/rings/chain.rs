//! Modulus chain management and prime generation.
use crate::crypto::{RlweError, RlweResult};
use crate::math::primes::is_prime;
use crypto_bigint::{CheckedMul, NonZero, U256};

/// Collection of primes whose product is the ciphertext modulus `Q`.
///
/// The chain itself stores only the primes; `Q` is recomputed on demand so it
/// always matches the active prime set.
#[derive(Debug, Clone, PartialEq)]
pub struct ModulusChain {
    primes: Vec<u64>,
}

impl ModulusChain {
    pub fn new(primes: Vec<u64>) -> RlweResult<Self> {
        if primes.is_empty() {
            return Err(RlweError::InvalidParameters {
                message: "modulus chain needs at least one prime".into(),
            });
        }
        for &p in &primes {
            if !is_prime(p) {
                return Err(RlweError::InvalidParameters {
                    message: format!("chain entry {p} is not prime"),
                });
            }
        }
        Ok(Self { primes })
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    /// Product of the chain primes as a `U256`, the ciphertext modulus `Q`.
    pub fn product(&self) -> RlweResult<NonZero<U256>> {
        let mut product = U256::ONE;
        for &prime in &self.primes {
            let next: Option<U256> =
                product.checked_mul(&U256::from(prime)).into();
            product = next.ok_or_else(|| RlweError::InvalidParameters {
                message: format!(
                    "chain product overflows 256 bits after multiplying {prime}"
                ),
            })?;
        }
        let product: Option<NonZero<U256>> = NonZero::new(product).into();
        product.ok_or_else(|| RlweError::InvalidParameters {
            message: "chain product is zero".into(),
        })
    }
}

/// Builder for constructing modulus chains with a given prime budget.
pub struct ModulusChainBuilder {
    prime_bits: u32,
    prime_count: Option<usize>,
}

impl ModulusChainBuilder {
    pub fn new(prime_bits: u32) -> Self {
        Self {
            prime_bits,
            prime_count: None,
        }
    }

    pub fn with_prime_count(mut self, count: usize) -> Self {
        self.prime_count = Some(count);
        self
    }

    pub fn build(self) -> RlweResult<ModulusChain> {
        let count = self.prime_count.unwrap_or(3);
        let primes = generate_chain_primes(self.prime_bits, count)?;
        ModulusChain::new(primes)
    }
}

/// Finds the `count` largest distinct primes of exactly `bit_size` bits,
/// walking downward from the top of the range.
fn generate_chain_primes(bit_size: u32, count: usize) -> RlweResult<Vec<u64>> {
    if !(4..=63).contains(&bit_size) {
        return Err(RlweError::InvalidParameters {
            message: format!(
                "chain prime width {bit_size} outside supported range 4..=63"
            ),
        });
    }
    if count == 0 {
        return Err(RlweError::InvalidParameters {
            message: "chain prime count must be positive".into(),
        });
    }

    let max_val = (1u64 << bit_size) - 1;
    let min_val = 1u64 << (bit_size - 1);
    let mut candidate = max_val | 1; // ensure odd

    let mut primes = Vec::with_capacity(count);
    while primes.len() < count && candidate >= min_val {
        if is_prime(candidate) {
            primes.push(candidate);
        }
        candidate = candidate.saturating_sub(2);
    }

    if primes.len() < count {
        return Err(RlweError::InvalidParameters {
            message: format!(
                "could not find {count} primes of {bit_size} bits"
            ),
        });
    }
    Ok(primes)
}
