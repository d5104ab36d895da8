//! Heap profiling for the encrypt/extract/decrypt pipeline at a larger ring
//! degree. Build with `--features dhat-heap` to record allocations.
#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rlwe_extract::RlweEngine;

const DEGREE: usize = 256;

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _dhat = dhat::Profiler::new_heap();

    println!("Beginning memory profiling at ring degree {DEGREE}");

    let engine = RlweEngine::<DEGREE>::builder()
        .hamming_weight(DEGREE / 2)
        .build(101)
        .expect("engine parameters are valid");
    let mut rng = ChaCha20Rng::seed_from_u64(123);

    println!("Generating secret key...");
    let secret_key = engine.generate_secret_key(&mut rng).unwrap();

    let message: Vec<u64> = (0..DEGREE as u64).map(|i| i % 101).collect();

    println!("Encrypting...");
    let ciphertext = engine.encrypt(&message, &secret_key, &mut rng).unwrap();

    println!("Extracting and decrypting every coefficient...");
    let mut mismatches = 0;
    for loc in 0..DEGREE {
        let value = engine.decrypt_at(&ciphertext, loc, &secret_key).unwrap();
        if value != message[loc] {
            mismatches += 1;
        }
    }
    println!("done, {mismatches} mismatches");
}
