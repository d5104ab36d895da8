pub mod builder;
pub mod engine;
pub mod errors;
pub mod operations;
pub mod types;

pub use builder::RlweEngineBuilder;
pub use engine::{RlweEngine, RlweParams};
pub use errors::{RlweError, RlweResult};
pub use operations::{decrypt, encrypt, extract};
pub use types::{Ciphertext, ExtractedCiphertext};
