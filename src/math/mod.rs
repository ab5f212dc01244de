//! Numeric helpers for the generation pipeline

use num_traits::{PrimInt, Unsigned};

/// Parity of an unsigned integer's bit pattern
///
/// Reduces the value bit by bit, XOR-accumulating the least significant bit
/// until the value reaches zero; equivalent to population count modulo 2.
/// `parity(0)` is 0.
pub fn parity<T>(mut value: T) -> u8
where
    T: PrimInt + Unsigned,
{
    let mut par = 0u8;
    while value != T::zero() {
        if value & T::one() == T::one() {
            par ^= 1;
        }
        value = value.unsigned_shr(1);
    }
    par
}

/// The k-th triangular number, `k·(k+1)/2`
pub const fn triangular(k: usize) -> usize {
    k * (k + 1) / 2
}

/// Primality by trial division up to the integer square root
pub const fn is_prime(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    if candidate < 4 {
        return true;
    }
    if candidate % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor * divisor <= candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{is_prime, parity, triangular};

    #[test]
    fn test_parity_pinned_values() {
        assert_eq!(parity(0u64), 0);
        assert_eq!(parity(1u64), 1);
        assert_eq!(parity(3u64), 0);
        assert_eq!(parity(7u64), 1);
        assert_eq!(parity(256u64), 1);
    }

    #[test]
    fn test_parity_matches_popcount() {
        for value in 0u64..512 {
            assert_eq!(parity(value), (value.count_ones() % 2) as u8);
        }
    }

    #[test]
    fn test_triangular_numbers() {
        assert_eq!(triangular(0), 0);
        assert_eq!(triangular(1), 1);
        assert_eq!(triangular(4), 10);
        assert_eq!(triangular(126), 8001);
    }

    #[test]
    fn test_primality() {
        let small_primes = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for p in small_primes {
            assert!(is_prime(p), "{p} should be prime");
        }
        for composite in [0u64, 1, 4, 9, 15, 21, 25, 27, 10_000] {
            assert!(!is_prime(composite), "{composite} should not be prime");
        }
    }
}
