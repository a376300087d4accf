//! Number-theory engines.
//!
//! Closed-form side of the puzzle:
//! - Factorization: trial division into ascending primes
//! - Divisors: divisor counting from prime-power exponents, parity per switch

pub mod divisors;
pub mod factorization;

pub use divisors::{
    analyze, count_divisors, is_odd_divisor_count, perfect_squares, DivisorCount,
};
pub use factorization::{factorize, PrimeFactorList};
