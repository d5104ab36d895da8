pub mod primes;
pub mod sampling;

pub use primes::{is_prime, is_prime_reference};
pub use sampling::{
    gaussian_noise_coefficients, ternary_coefficients, uniform_coefficients,
};
