pub mod crypto;
pub mod keys;
pub mod math;
pub mod rings;

pub use crypto::{
    Ciphertext, ExtractedCiphertext, RlweEngine, RlweEngineBuilder, RlweError,
    RlweParams, RlweResult, decrypt, encrypt, extract,
};
pub use keys::{SecretKey, SecretKeyParams};
pub use rings::{ModulusChain, ModulusChainBuilder, RingContext, RingPoly};
