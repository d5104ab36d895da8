//! Secret Key (sk): Sample a "small" polynomial s(X) from R.
//! "Small" means its coefficients are small (e.g., chosen from {-1, 0, 1})
use crate::crypto::{RlweError, RlweResult};
use crate::rings::{RingContext, RingPoly};
use rand::Rng;

/// Parameters for generating a sparse ternary secret key.
#[derive(Debug, Clone)]
pub struct SecretKeyParams<const DEGREE: usize> {
    pub hamming_weight: usize,
}

impl<const DEGREE: usize> SecretKeyParams<DEGREE> {
    fn validate(&self) -> RlweResult<()> {
        if self.hamming_weight == 0 || self.hamming_weight > DEGREE {
            Err(RlweError::InvalidParameters {
                message: format!(
                    "hamming weight {} must be in 1..={DEGREE}",
                    self.hamming_weight
                ),
            })
        } else {
            Ok(())
        }
    }
}

/// Secret key in coefficient form, shared by encryption (ring multiplication
/// with `c1`) and extracted-ciphertext decryption (inner product).
pub struct SecretKey<const DEGREE: usize> {
    pub poly: RingPoly<DEGREE>,
}

impl<const DEGREE: usize> SecretKey<DEGREE> {
    /// Generate a new sparse ternary secret key of exact Hamming weight.
    pub fn generate<R: Rng>(
        params: &SecretKeyParams<DEGREE>,
        ctx: &RingContext<DEGREE>,
        rng: &mut R,
    ) -> RlweResult<Self> {
        params.validate()?;
        let poly =
            RingPoly::sample_ternary(params.hamming_weight, ctx, rng);
        Ok(SecretKey { poly })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::ModulusChain;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const DEGREE: usize = 128;

    fn ctx() -> RingContext<DEGREE> {
        let chain = ModulusChain::new(vec![7829, 6761, 5693]).unwrap();
        RingContext::new(101, chain).unwrap()
    }

    #[test]
    fn generated_key_has_exact_hamming_weight() {
        let ctx = ctx();
        let params = SecretKeyParams { hamming_weight: 40 };
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let sk = SecretKey::generate(&params, &ctx, &mut rng).unwrap();
        let non_zero = sk
            .poly
            .to_centered_coeffs(&ctx)
            .iter()
            .filter(|&&x| x != 0)
            .count();
        assert_eq!(non_zero, 40);
    }

    #[test]
    fn key_coefficients_are_ternary() {
        let ctx = ctx();
        let params = SecretKeyParams { hamming_weight: 20 };
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let sk = SecretKey::generate(&params, &ctx, &mut rng).unwrap();
        for value in sk.poly.to_centered_coeffs(&ctx) {
            assert!(
                (-1..=1).contains(&value),
                "coefficient {value} should be -1, 0, or 1"
            );
        }
    }

    #[test]
    fn signs_are_roughly_balanced_across_keys() {
        let ctx = ctx();
        let params = SecretKeyParams { hamming_weight: 64 };

        let mut ones = 0usize;
        let mut neg_ones = 0usize;
        for seed in 0..10 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let sk = SecretKey::generate(&params, &ctx, &mut rng).unwrap();
            for value in sk.poly.to_centered_coeffs(&ctx) {
                match value {
                    1 => ones += 1,
                    -1 => neg_ones += 1,
                    _ => {}
                }
            }
        }

        let ratio = ones as f64 / (ones + neg_ones) as f64;
        assert!(
            (ratio - 0.5).abs() < 0.1,
            "1 and -1 should be equally distributed, got ratio {ratio}"
        );
    }

    #[test]
    fn rejects_invalid_hamming_weight() {
        let ctx = ctx();
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let zero = SecretKeyParams::<DEGREE> { hamming_weight: 0 };
        let oversized = SecretKeyParams::<DEGREE> {
            hamming_weight: DEGREE + 1,
        };
        assert!(SecretKey::generate(&zero, &ctx, &mut rng).is_err());
        assert!(SecretKey::generate(&oversized, &ctx, &mut rng).is_err());
    }
}
