//! Prime factorization.

/// Prime factors of `n` in ascending order, repeated by multiplicity.
///
/// `0` and `1` have no prime factors.
pub fn compute_prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut remaining = n;
    let mut candidate = 2;
    while candidate <= remaining / candidate {
        while remaining % candidate == 0 {
            factors.push(candidate);
            remaining /= candidate;
        }
        candidate += if candidate == 2 { 1 } else { 2 };
    }
    if remaining > 1 {
        factors.push(remaining);
    }

    factors
}
