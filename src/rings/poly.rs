use super::RingContext;
use crate::math::{
    gaussian_noise_coefficients, ternary_coefficients, uniform_coefficients,
};
use crypto_bigint::{NonZero, U256, Zero};
use rand::Rng;

/// Negation in `Z_Q`, keeping residues canonical in `[0, Q)`.
///
/// `Q.wrapping_sub(0)` would yield `Q` itself, so zero is special-cased.
pub(crate) fn neg_coeff_mod(value: &U256, q: &NonZero<U256>) -> U256 {
    if bool::from(value.is_zero()) {
        U256::ZERO
    } else {
        q.wrapping_sub(value)
    }
}

/// Element of `Z_Q[X]/(X^DEGREE + 1)` as a fixed coefficient vector.
///
/// The polynomial carries no modulus of its own; every arithmetic method
/// takes the [`RingContext`] explicitly, so there is no ambient modulus state
/// to fall out of sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingPoly<const DEGREE: usize> {
    coeffs: [U256; DEGREE],
}

impl<const DEGREE: usize> RingPoly<DEGREE> {
    pub fn zero() -> Self {
        Self {
            coeffs: [U256::ZERO; DEGREE],
        }
    }

    /// Builds a polynomial from signed coefficients, mapping each value into
    /// the canonical range `[0, Q)`. Slices shorter than `DEGREE` are
    /// zero-extended.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs.len() > DEGREE`.
    pub fn from_signed_coeffs(
        coeffs: &[i64],
        ctx: &RingContext<DEGREE>,
    ) -> Self {
        assert!(
            coeffs.len() <= DEGREE,
            "from_signed_coeffs: too many coefficients"
        );
        let q = ctx.ciphertext_modulus();
        let mut poly_coeffs = [U256::ZERO; DEGREE];
        for (slot, &coeff) in poly_coeffs.iter_mut().zip(coeffs.iter()) {
            *slot = if coeff >= 0 {
                U256::from(coeff as u64).rem(q)
            } else {
                let abs = U256::from(coeff.unsigned_abs()).rem(q);
                neg_coeff_mod(&abs, q)
            };
        }
        Self {
            coeffs: poly_coeffs,
        }
    }

    /// Builds a polynomial from unsigned coefficients reduced mod `Q`.
    /// Slices shorter than `DEGREE` are zero-extended.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs.len() > DEGREE`.
    pub fn from_unsigned_coeffs(
        coeffs: &[u64],
        ctx: &RingContext<DEGREE>,
    ) -> Self {
        assert!(
            coeffs.len() <= DEGREE,
            "from_unsigned_coeffs: too many coefficients"
        );
        let q = ctx.ciphertext_modulus();
        let mut poly_coeffs = [U256::ZERO; DEGREE];
        for (slot, &coeff) in poly_coeffs.iter_mut().zip(coeffs.iter()) {
            *slot = U256::from(coeff).rem(q);
        }
        Self {
            coeffs: poly_coeffs,
        }
    }

    pub fn coeff(&self, index: usize) -> U256 {
        self.coeffs[index]
    }

    pub fn coeffs(&self) -> &[U256; DEGREE] {
        &self.coeffs
    }

    pub fn add_assign_mod(&mut self, rhs: &Self, ctx: &RingContext<DEGREE>) {
        let q = ctx.ciphertext_modulus();
        for (lhs, rhs) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *lhs = lhs.add_mod(rhs, q);
        }
    }

    pub fn sub_assign_mod(&mut self, rhs: &Self, ctx: &RingContext<DEGREE>) {
        let q = ctx.ciphertext_modulus();
        for (lhs, rhs) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *lhs = lhs.sub_mod(rhs, q);
        }
    }

    pub fn negate_assign(&mut self, ctx: &RingContext<DEGREE>) {
        let q = ctx.ciphertext_modulus();
        for coeff in &mut self.coeffs {
            *coeff = neg_coeff_mod(coeff, q);
        }
    }

    /// Multiplies every coefficient by a small scalar mod `Q`.
    pub fn scalar_mul_assign(&mut self, factor: u64, ctx: &RingContext<DEGREE>) {
        let q = ctx.ciphertext_modulus();
        let factor = U256::from(factor).rem(q);
        for coeff in &mut self.coeffs {
            *coeff = coeff.mul_mod(&factor, q);
        }
    }

    /// Negacyclic convolution: ring multiplication in `Z_Q[X]/(X^DEGREE + 1)`.
    ///
    /// Schoolbook double loop; products whose degree reaches `DEGREE` wrap
    /// around with a sign flip because `X^DEGREE = -1`.
    pub fn mul_mod(&self, rhs: &Self, ctx: &RingContext<DEGREE>) -> Self {
        let q = ctx.ciphertext_modulus();
        let mut result = [U256::ZERO; DEGREE];
        for i in 0..DEGREE {
            for j in 0..DEGREE {
                let product = self.coeffs[i].mul_mod(&rhs.coeffs[j], q);
                if i + j < DEGREE {
                    result[i + j] = result[i + j].add_mod(&product, q);
                } else {
                    let wrapped = (i + j) - DEGREE;
                    result[wrapped] = result[wrapped].sub_mod(&product, q);
                }
            }
        }
        Self { coeffs: result }
    }

    /// Multiplication by the monomial `X^shift`.
    ///
    /// Coefficient `i` moves to `(i + shift) mod DEGREE`, negated whenever the
    /// move wraps past the top of the ring (`X^DEGREE = -1`). Shifts are
    /// accepted modulo the full period `2 * DEGREE`.
    pub fn rotate_negacyclic(
        &self,
        shift: usize,
        ctx: &RingContext<DEGREE>,
    ) -> Self {
        let q = ctx.ciphertext_modulus();
        let reduced = shift % (2 * DEGREE);
        let (base, flip_all) = if reduced >= DEGREE {
            (reduced - DEGREE, true)
        } else {
            (reduced, false)
        };

        let mut coeffs = [U256::ZERO; DEGREE];
        for (i, coeff) in self.coeffs.iter().enumerate() {
            let target = (i + base) % DEGREE;
            let wrapped = i + base >= DEGREE;
            coeffs[target] = if wrapped != flip_all {
                neg_coeff_mod(coeff, q)
            } else {
                *coeff
            };
        }
        Self { coeffs }
    }

    /// Exports coefficients as centered representatives in `[-Q/2, Q/2)`.
    ///
    /// Truncates to the low 64 bits of the magnitude, so this is only
    /// meaningful for residues that are small on the centered scale (noise,
    /// keys, decrypted values).
    pub fn to_centered_coeffs(&self, ctx: &RingContext<DEGREE>) -> [i64; DEGREE] {
        let q = ctx.ciphertext_modulus();
        let half = ctx.half_modulus();
        let mut signed = [0i64; DEGREE];
        for (slot, coeff) in signed.iter_mut().zip(self.coeffs.iter()) {
            *slot = if coeff < &half {
                coeff.as_words()[0] as i64
            } else {
                let magnitude = q.wrapping_sub(coeff);
                -(magnitude.as_words()[0] as i64)
            };
        }
        signed
    }

    /// Uniform polynomial mod `Q`: each coefficient assembled from full
    /// 64-bit words and reduced.
    pub fn sample_uniform<R: Rng>(
        ctx: &RingContext<DEGREE>,
        rng: &mut R,
    ) -> Self {
        let q = ctx.ciphertext_modulus();
        let mut coeffs = [U256::ZERO; DEGREE];
        for coeff in &mut coeffs {
            let words = [
                rng.random::<u64>(),
                rng.random::<u64>(),
                rng.random::<u64>(),
                rng.random::<u64>(),
            ];
            *coeff = U256::from_words(words).rem(q);
        }
        Self { coeffs }
    }

    /// Rounded-Gaussian noise polynomial with the given standard deviation,
    /// mapped into `[0, Q)`.
    pub fn sample_noise<R: Rng>(
        std_dev: f64,
        ctx: &RingContext<DEGREE>,
        rng: &mut R,
    ) -> Self {
        let noise = gaussian_noise_coefficients::<DEGREE, R>(std_dev, rng);
        Self::from_signed_coeffs(&noise, ctx)
    }

    /// Sparse ternary polynomial with exactly `hamming_weight` non-zero
    /// coefficients in `{-1, 1}`.
    pub fn sample_ternary<R: Rng>(
        hamming_weight: usize,
        ctx: &RingContext<DEGREE>,
        rng: &mut R,
    ) -> Self {
        let ternary = ternary_coefficients::<DEGREE, R>(hamming_weight, rng);
        Self::from_signed_coeffs(&ternary, ctx)
    }

    /// Uniform polynomial with coefficients drawn from `[0, max_value)`,
    /// for building random plaintexts.
    pub fn sample_uniform_below<R: Rng>(
        max_value: u64,
        ctx: &RingContext<DEGREE>,
        rng: &mut R,
    ) -> Self {
        let coeffs = uniform_coefficients::<DEGREE, R>(max_value, rng);
        Self::from_unsigned_coeffs(&coeffs, ctx)
    }
}
