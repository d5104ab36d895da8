use super::builder::RlweEngineBuilder;
use super::{Ciphertext, ExtractedCiphertext, RlweResult, operations};
use crate::keys::{SecretKey, SecretKeyParams};
use crate::rings::RingContext;
use rand::Rng;

/// Scheme parameters shared by every operation of one engine.
#[derive(Debug, Clone)]
pub struct RlweParams {
    pub error_std_dev: f64,
    pub hamming_weight: usize,
}

/// Facade bundling a ring context with scheme parameters.
///
/// The free functions in [`operations`](super::operations) stay usable on
/// their own; the engine exists so callers do not have to thread the context
/// and noise parameters through every call site.
pub struct RlweEngine<const DEGREE: usize> {
    context: RingContext<DEGREE>,
    pub params: RlweParams,
}

impl<const DEGREE: usize> RlweEngine<DEGREE> {
    pub fn builder() -> RlweEngineBuilder<DEGREE> {
        RlweEngineBuilder::new()
    }

    pub fn new(context: RingContext<DEGREE>, params: RlweParams) -> Self {
        Self { context, params }
    }

    pub fn context(&self) -> &RingContext<DEGREE> {
        &self.context
    }

    pub fn generate_secret_key<R: Rng>(
        &self,
        rng: &mut R,
    ) -> RlweResult<SecretKey<DEGREE>> {
        let sk_params = SecretKeyParams {
            hamming_weight: self.params.hamming_weight,
        };
        SecretKey::generate(&sk_params, &self.context, rng)
    }

    pub fn encrypt<R: Rng>(
        &self,
        message: &[u64],
        secret_key: &SecretKey<DEGREE>,
        rng: &mut R,
    ) -> RlweResult<Ciphertext<DEGREE>> {
        operations::encrypt(
            message,
            secret_key,
            &self.context,
            self.params.error_std_dev,
            rng,
        )
    }

    pub fn extract(
        &self,
        ciphertext: &Ciphertext<DEGREE>,
        loc: usize,
    ) -> RlweResult<ExtractedCiphertext<DEGREE>> {
        operations::extract(ciphertext, loc, &self.context)
    }

    pub fn decrypt(
        &self,
        extracted: &ExtractedCiphertext<DEGREE>,
        secret_key: &SecretKey<DEGREE>,
    ) -> u64 {
        operations::decrypt(extracted, secret_key, &self.context)
    }

    /// Extracts and decrypts the plaintext coefficient at `loc` in one step.
    pub fn decrypt_at(
        &self,
        ciphertext: &Ciphertext<DEGREE>,
        loc: usize,
        secret_key: &SecretKey<DEGREE>,
    ) -> RlweResult<u64> {
        let extracted = self.extract(ciphertext, loc)?;
        Ok(self.decrypt(&extracted, secret_key))
    }
}
