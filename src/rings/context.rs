use super::ModulusChain;
use crate::crypto::{RlweError, RlweResult};
use crypto_bigint::{NonZero, U256};

/// Immutable parameters of the ring `Z[X]/(X^DEGREE + 1)`.
///
/// Holds the plaintext modulus `p`, the active modulus chain, and the
/// ciphertext modulus `Q` (product of the chain primes). Built once and then
/// borrowed by every operation; no arithmetic consults any global state.
#[derive(Debug, Clone, PartialEq)]
pub struct RingContext<const DEGREE: usize> {
    plain_modulus: u64,
    plain_modulus_big: NonZero<U256>,
    chain: ModulusChain,
    q: NonZero<U256>,
}

impl<const DEGREE: usize> RingContext<DEGREE> {
    pub fn new(plain_modulus: u64, chain: ModulusChain) -> RlweResult<Self> {
        if DEGREE == 0 || !DEGREE.is_power_of_two() {
            return Err(RlweError::InvalidParameters {
                message: format!(
                    "ring degree {DEGREE} must be a positive power of two"
                ),
            });
        }
        if plain_modulus <= 1 {
            return Err(RlweError::InvalidParameters {
                message: format!(
                    "plaintext modulus {plain_modulus} must exceed 1"
                ),
            });
        }
        let q = chain.product()?;
        let plain_modulus_big: Option<NonZero<U256>> =
            NonZero::new(U256::from(plain_modulus)).into();
        let plain_modulus_big =
            plain_modulus_big.ok_or_else(|| RlweError::InvalidParameters {
                message: "plaintext modulus is zero".into(),
            })?;
        if q.get() <= plain_modulus_big.get() {
            return Err(RlweError::InvalidParameters {
                message: format!(
                    "ciphertext modulus must exceed plaintext modulus {plain_modulus}"
                ),
            });
        }
        Ok(Self {
            plain_modulus,
            plain_modulus_big,
            chain,
            q,
        })
    }

    pub fn degree(&self) -> usize {
        DEGREE
    }

    pub fn plaintext_modulus(&self) -> u64 {
        self.plain_modulus
    }

    /// Plaintext modulus lifted to `U256`, for reductions of big residues.
    pub fn plaintext_modulus_big(&self) -> &NonZero<U256> {
        &self.plain_modulus_big
    }

    /// The ciphertext modulus `Q`, product of the active chain primes.
    pub fn ciphertext_modulus(&self) -> &NonZero<U256> {
        &self.q
    }

    pub fn chain(&self) -> &ModulusChain {
        &self.chain
    }

    /// Threshold `Q / 2` separating the positive and negative halves of the
    /// centered representative range `[-Q/2, Q/2)`.
    pub fn half_modulus(&self) -> U256 {
        self.q.wrapping_shr(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::ModulusChainBuilder;

    fn small_chain() -> ModulusChain {
        ModulusChain::new(vec![7829, 6761, 5693]).unwrap()
    }

    #[test]
    fn exposes_parameters() {
        let ctx = RingContext::<8>::new(101, small_chain()).unwrap();
        assert_eq!(ctx.degree(), 8);
        assert_eq!(ctx.plaintext_modulus(), 101);
        assert_eq!(
            ctx.ciphertext_modulus().get(),
            U256::from(7829u64 * 6761 * 5693)
        );
        assert_eq!(ctx.chain().prime_count(), 3);
    }

    #[test]
    fn rejects_non_power_of_two_degree() {
        let err = RingContext::<12>::new(101, small_chain()).unwrap_err();
        assert!(matches!(
            err,
            crate::crypto::RlweError::InvalidParameters { .. }
        ));
    }

    #[test]
    fn rejects_degenerate_plaintext_modulus() {
        assert!(RingContext::<8>::new(0, small_chain()).is_err());
        assert!(RingContext::<8>::new(1, small_chain()).is_err());
    }

    #[test]
    fn rejects_plaintext_modulus_at_least_q() {
        let chain = ModulusChain::new(vec![5]).unwrap();
        assert!(RingContext::<4>::new(7, chain).is_err());
    }

    #[test]
    fn builder_chain_composes_with_context() {
        let chain = ModulusChainBuilder::new(59).build().unwrap();
        let ctx = RingContext::<32>::new(101, chain).unwrap();
        assert!(ctx.ciphertext_modulus().get() > U256::from(101u64));
    }
}
