//! Full cycle: encrypt a random plaintext polynomial, then extract and
//! decrypt every coefficient individually.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rlwe_extract::{RlweEngine, RlweError, math::uniform_coefficients};

const DEGREE: usize = 32;

fn main() -> Result<(), RlweError> {
    let engine = RlweEngine::<DEGREE>::builder()
        .hamming_weight(16)
        .build(101)?;
    let ctx = engine.context();
    println!(
        "ring degree {}, plaintext modulus {}, chain of {} primes",
        ctx.degree(),
        ctx.plaintext_modulus(),
        ctx.chain().prime_count()
    );

    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let secret_key = engine.generate_secret_key(&mut rng)?;

    let message = uniform_coefficients::<DEGREE, _>(101, &mut rng);
    println!("plaintext: {message:?}");

    let ciphertext = engine.encrypt(&message, &secret_key, &mut rng)?;

    let mut failures = 0;
    for loc in 0..DEGREE {
        let value = engine.decrypt_at(&ciphertext, loc, &secret_key)?;
        if value != message[loc] {
            println!("fail at {loc} loc: got {value}, want {}", message[loc]);
            failures += 1;
        }
    }

    if failures == 0 {
        println!("all {DEGREE} coefficients recovered exactly");
    } else {
        println!("{failures} coefficients mismatched");
    }
    Ok(())
}
