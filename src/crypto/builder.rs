use super::engine::{RlweEngine, RlweParams};
use super::{RlweError, RlweResult};
use crate::rings::{ModulusChainBuilder, RingContext};

/// Builder assembling a modulus chain, ring context, and engine parameters.
///
/// Defaults: noise standard deviation 3.2, Hamming weight `DEGREE / 2`, and
/// a chain of three 59-bit primes.
pub struct RlweEngineBuilder<const DEGREE: usize> {
    error_std_dev: Option<f64>,
    hamming_weight: Option<usize>,
    prime_bits: Option<u32>,
    prime_count: Option<usize>,
}

impl<const DEGREE: usize> Default for RlweEngineBuilder<DEGREE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const DEGREE: usize> RlweEngineBuilder<DEGREE> {
    pub fn new() -> Self {
        Self {
            error_std_dev: None,
            hamming_weight: None,
            prime_bits: None,
            prime_count: None,
        }
    }

    pub fn error_std_dev(mut self, std_dev: f64) -> Self {
        self.error_std_dev = Some(std_dev);
        self
    }

    pub fn hamming_weight(mut self, weight: usize) -> Self {
        self.hamming_weight = Some(weight);
        self
    }

    pub fn prime_bits(mut self, bits: u32) -> Self {
        self.prime_bits = Some(bits);
        self
    }

    pub fn prime_count(mut self, count: usize) -> Self {
        self.prime_count = Some(count);
        self
    }

    pub fn build(
        self,
        plaintext_modulus: u64,
    ) -> RlweResult<RlweEngine<DEGREE>> {
        let error_std_dev = self.error_std_dev.unwrap_or(3.2);
        if !error_std_dev.is_finite() || error_std_dev <= 0.0 {
            return Err(RlweError::InvalidParameters {
                message: format!(
                    "noise standard deviation {error_std_dev} must be finite and positive"
                ),
            });
        }

        let chain = ModulusChainBuilder::new(self.prime_bits.unwrap_or(59))
            .with_prime_count(self.prime_count.unwrap_or(3))
            .build()?;
        let context = RingContext::new(plaintext_modulus, chain)?;

        let params = RlweParams {
            error_std_dev,
            hamming_weight: self.hamming_weight.unwrap_or(DEGREE / 2),
        };
        Ok(RlweEngine::new(context, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let engine = RlweEngineBuilder::<32>::new().build(101).unwrap();
        assert_eq!(engine.context().degree(), 32);
        assert_eq!(engine.context().plaintext_modulus(), 101);
        assert_eq!(engine.context().chain().prime_count(), 3);
        assert_eq!(engine.params.hamming_weight, 16);
    }

    #[test]
    fn rejects_bad_noise_parameters() {
        assert!(
            RlweEngineBuilder::<32>::new()
                .error_std_dev(0.0)
                .build(101)
                .is_err()
        );
        assert!(
            RlweEngineBuilder::<32>::new()
                .error_std_dev(f64::INFINITY)
                .build(101)
                .is_err()
        );
    }

    #[test]
    fn propagates_context_validation() {
        assert!(RlweEngineBuilder::<24>::new().build(101).is_err());
        assert!(RlweEngineBuilder::<32>::new().build(1).is_err());
    }
}
