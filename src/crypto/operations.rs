//! Symmetric RLWE encryption, coefficient extraction, and decryption.
//!
//! Encryption builds an RLWE instance `(c0, c1)` with `c0 + c1·s = p·e` for
//! short Gaussian noise `e`, then adds the message into `c0`, so the pair
//! satisfies `c0 + c1·s ≡ m + p·e (mod Q)`. Extraction rewrites such a pair
//! into an inner-product ciphertext of one chosen coefficient of `m`, which
//! decrypts by a dot product with the secret key followed by centered
//! reduction mod `Q` and reduction mod `p`.
use super::{Ciphertext, ExtractedCiphertext, RlweError, RlweResult};
use crate::keys::SecretKey;
use crate::rings::poly::neg_coeff_mod;
use crate::rings::{RingContext, RingPoly};
use crypto_bigint::U256;
use rand::Rng;

/// Encrypts a plaintext polynomial under the secret key.
///
/// `message` holds the plaintext coefficients, low degree first; slices
/// shorter than the ring degree are zero-extended, and coefficients are
/// reduced mod `p` before use.
///
/// The mask `c1` is uniform mod `Q` and its companion is
/// `c0 = -(c1·s) + p·e + m (mod Q)`, with `e` a rounded-Gaussian noise
/// polynomial of the given standard deviation.
///
/// # Errors
/// `MalformedInput` if `message` has more than `DEGREE` coefficients.
pub fn encrypt<const DEGREE: usize, R: Rng>(
    message: &[u64],
    secret_key: &SecretKey<DEGREE>,
    ctx: &RingContext<DEGREE>,
    error_std_dev: f64,
    rng: &mut R,
) -> RlweResult<Ciphertext<DEGREE>> {
    if message.len() > DEGREE {
        return Err(RlweError::MalformedInput {
            message: format!(
                "plaintext has {} coefficients, ring degree is {DEGREE}",
                message.len()
            ),
        });
    }
    let p = ctx.plaintext_modulus();
    let reduced: Vec<u64> = message.iter().map(|&c| c % p).collect();
    let plaintext = RingPoly::from_unsigned_coeffs(&reduced, ctx);

    let c1 = RingPoly::sample_uniform(ctx, rng);
    let mut noise = RingPoly::sample_noise(error_std_dev, ctx, rng);
    noise.scalar_mul_assign(p, ctx);

    // c0 = -(c1·s) + p·e + m
    let mut c0 = c1.mul_mod(&secret_key.poly, ctx);
    c0.negate_assign(ctx);
    c0.add_assign_mod(&noise, ctx);
    c0.add_assign_mod(&plaintext, ctx);

    Ok(Ciphertext::from_pair(c0, c1))
}

/// Derives a ciphertext of the single plaintext coefficient at `loc`.
///
/// The decryption of `(c0, c1)` at position `loc` is
/// `c0[loc] + Σ_i s[i]·(c1·X^i)[loc]`, and `(c1·X^i)[loc]` is `c1[loc - i]`
/// with a sign flip whenever `loc - i` wraps below zero. The output stores
/// those rotated-and-signed `c1` coefficients as `weights` and `c0[loc]` as
/// the trailing `constant`, so the plain inner product with the key
/// reproduces coefficient `loc` of the plaintext.
///
/// # Errors
/// `MalformedInput` unless the ciphertext has exactly two parts;
/// `IndexOutOfRange` unless `loc < DEGREE`.
pub fn extract<const DEGREE: usize>(
    ciphertext: &Ciphertext<DEGREE>,
    loc: usize,
    ctx: &RingContext<DEGREE>,
) -> RlweResult<ExtractedCiphertext<DEGREE>> {
    if ciphertext.part_count() != 2 {
        return Err(RlweError::MalformedInput {
            message: format!(
                "expected 2 ciphertext parts, found {}",
                ciphertext.part_count()
            ),
        });
    }
    if loc >= DEGREE {
        return Err(RlweError::IndexOutOfRange {
            index: loc,
            degree: DEGREE,
        });
    }

    let q = ctx.ciphertext_modulus();
    let c0 = &ciphertext.parts()[0];
    let c1 = &ciphertext.parts()[1];

    let mut weights = [U256::ZERO; DEGREE];
    // loc = i + j (mod DEGREE), so j = loc - i, wrapped into [0, DEGREE)
    // with the X^DEGREE = -1 sign flip when it falls below zero.
    for (i, weight) in weights.iter_mut().enumerate() {
        let j = loc as isize - i as isize;
        let coeff = if j < 0 {
            let jj = (j + DEGREE as isize) as usize;
            neg_coeff_mod(&c1.coeff(jj), q)
        } else {
            c1.coeff(j as usize)
        };
        *weight = coeff;
    }

    Ok(ExtractedCiphertext {
        weights,
        constant: c0.coeff(loc),
    })
}

/// Decrypts an extracted ciphertext to a value in `[0, p)`.
///
/// Evaluates `t = constant + Σ weights[i]·s[i] (mod Q)`, lifts `t` into the
/// centered range `[-Q/2, Q/2)`, and returns the nonnegative representative
/// of `t mod p`.
///
/// Correctness requires the noise bound `|p·e| < Q/2` to hold for the
/// parameters that produced the ciphertext; with an overly aggressive
/// parameter choice the centered lift lands on the wrong side and the result
/// is silently wrong.
pub fn decrypt<const DEGREE: usize>(
    extracted: &ExtractedCiphertext<DEGREE>,
    secret_key: &SecretKey<DEGREE>,
    ctx: &RingContext<DEGREE>,
) -> u64 {
    let q = ctx.ciphertext_modulus();
    let p_big = ctx.plaintext_modulus_big();
    let p = ctx.plaintext_modulus();

    let mut inner_product = extracted.constant;
    for (weight, key_coeff) in extracted
        .weights
        .iter()
        .zip(secret_key.poly.coeffs().iter())
    {
        let term = weight.mul_mod(key_coeff, q);
        inner_product = inner_product.add_mod(&term, q);
    }

    // Interpret the sum in [-Q/2, Q/2) before dropping to the plaintext
    // modulus.
    if inner_product < ctx.half_modulus() {
        inner_product.rem(p_big).as_words()[0]
    } else {
        let magnitude = q.wrapping_sub(&inner_product);
        let residue = magnitude.rem(p_big).as_words()[0];
        (p - residue) % p
    }
}
