pub mod chain;
pub mod context;
pub mod poly;

pub use chain::{ModulusChain, ModulusChainBuilder};
pub use context::RingContext;
pub use poly::RingPoly;
