//! Divisor counting and switch parity.
//!
//! # Governing Equations
//!
//! ```text
//! n = p₁^e₁ · p₂^e₂ · … · pₖ^eₖ
//! d(n) = (e₁ + 1)(e₂ + 1)…(eₖ + 1)
//! switch i ends on  ⇔  d(i) is odd  ⇔  every eⱼ is even  ⇔  i is a perfect square
//! ```
//!
//! Switch `i` is toggled once per divisor of `i`, so its final state is the
//! parity of `d(i)`.

use std::num::NonZeroU64;

use tracing::debug;

use super::factorization::{factorize_nonzero, PrimeFactorList};
use crate::engine::{OnSwitchSet, SwitchCount};
use crate::error::{SwitchError, SwitchResult};

/// Count of positive divisors of a number.
pub type DivisorCount = u64;

fn divisors_from_factors(factors: &PrimeFactorList) -> DivisorCount {
    factors
        .exponents()
        .iter()
        .map(|&(_, exponent)| DivisorCount::from(exponent) + 1)
        .product()
}

fn has_odd_divisor_count(number: NonZeroU64) -> bool {
    divisors_from_factors(&factorize_nonzero(number)) % 2 == 1
}

/// Number of positive divisors of `number`.
///
/// # Errors
///
/// Returns [`SwitchError::InvalidInput`] for `0`, which every integer divides.
pub fn count_divisors(number: u64) -> SwitchResult<DivisorCount> {
    let number = NonZeroU64::new(number)
        .ok_or_else(|| SwitchError::invalid_input("divisor count of 0 is undefined"))?;
    Ok(divisors_from_factors(&factorize_nonzero(number)))
}

/// Whether `number` has an odd number of divisors (i.e. is a perfect square).
///
/// # Errors
///
/// Returns [`SwitchError::InvalidInput`] for `0`.
pub fn is_odd_divisor_count(number: u64) -> SwitchResult<bool> {
    Ok(count_divisors(number)? % 2 == 1)
}

/// Decide every switch `1..=n` by divisor-count parity.
#[must_use]
pub fn analyze(n: SwitchCount) -> OnSwitchSet {
    let on: OnSwitchSet = (1..=n.get())
        .filter(|&index| {
            u64::try_from(index)
                .ok()
                .and_then(NonZeroU64::new)
                .is_some_and(has_odd_divisor_count)
        })
        .collect();
    debug!(switches = n.get(), on = on.len(), "divisor analysis finished");
    on
}

/// Perfect squares `1, 4, 9, … ≤ n`, computed directly.
///
/// Independent of both the simulation and the divisor analysis.
#[must_use]
pub fn perfect_squares(n: SwitchCount) -> OnSwitchSet {
    (1..=n.get().isqrt()).map(|root| root * root).collect()
}
