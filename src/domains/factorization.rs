//! Prime factorization by trial division.
//!
//! A number is peeled one prime at a time: the smallest divisor `d` with
//! `d² ≤ remaining` is always prime, so it is recorded and divided out.
//! Whatever is left above 1 once no such divisor exists is itself prime.
//!
//! The list carries no unit sentinel: `factorize(1)` is empty and a prime
//! `p` factors as `[p]`.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

use crate::error::{SwitchError, SwitchResult};

/// Ascending primes (with repetition) whose product is the factored number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimeFactorList {
    factors: Vec<u64>,
}

impl PrimeFactorList {
    /// Prime factors in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.factors
    }

    /// Number of prime factors counted with multiplicity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// True only for the factorization of 1.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Product of all factors (1 for the empty list).
    #[must_use]
    pub fn product(&self) -> u64 {
        self.factors.iter().product()
    }

    /// Group the list into `(prime, exponent)` pairs.
    ///
    /// `12 = [2, 2, 3]` becomes `[(2, 2), (3, 1)]`.
    #[must_use]
    pub fn exponents(&self) -> Vec<(u64, u32)> {
        let mut grouped: Vec<(u64, u32)> = Vec::new();
        for &prime in &self.factors {
            match grouped.last_mut() {
                Some((last, exponent)) if *last == prime => *exponent += 1,
                _ => grouped.push((prime, 1)),
            }
        }
        grouped
    }
}

/// Factor `number` into primes.
///
/// # Errors
///
/// Returns [`SwitchError::InvalidInput`] for `0`, which has no prime
/// factorization.
pub fn factorize(number: u64) -> SwitchResult<PrimeFactorList> {
    NonZeroU64::new(number)
        .map(factorize_nonzero)
        .ok_or_else(|| SwitchError::invalid_input("cannot factorize 0"))
}

/// Infallible factorization used by the divisor analysis.
pub(crate) fn factorize_nonzero(number: NonZeroU64) -> PrimeFactorList {
    let mut remaining = number.get();
    let mut factors = Vec::new();
    let mut divisor: u64 = 2;

    // divisor <= remaining / divisor is d² <= remaining without overflow
    while divisor <= remaining / divisor {
        if remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        } else {
            divisor += 1;
        }
    }
    if remaining > 1 {
        factors.push(remaining);
    }

    PrimeFactorList { factors }
}
