//! Multi-bit arithmetic operations.
//!
//! Provides ripple-carry addition, one's and two's complement, and
//! magnitude comparison for unsigned binary words.

use std::cmp::Ordering;
use crate::binary::{Bit, BitWord};

/// Add two equal-width words, returning (result, carry_out).
///
/// # Panics
/// Panics if the operand widths differ.
pub fn add(a: &BitWord, b: &BitWord) -> (BitWord, Bit) {
    assert_eq!(a.width(), b.width(), "ripple-carry add requires equal widths");

    let mut result = BitWord::zero(a.width());
    let mut carry = Bit::O;

    for i in 0..a.width() {
        let (sum, new_carry) = a.get(i).full_add(b.get(i), carry);
        result.set(i, sum);
        carry = new_carry;
    }

    (result, carry)
}

/// One's complement: invert every bit.
#[inline]
pub fn ones_complement(a: &BitWord) -> BitWord {
    a.invert()
}

/// Add one to a word by scanning from the LSB: trailing ones flip to
/// zero until the first zero, which becomes a one. An all-ones word
/// wraps around to zero.
pub fn increment(a: &BitWord) -> BitWord {
    let mut result = a.clone();

    for i in 0..result.width() {
        if result.get(i).is_zero() {
            result.set(i, Bit::I);
            return result;
        }
        result.set(i, Bit::O);
    }

    result
}

/// Two's complement: one's complement plus one.
#[inline]
pub fn twos_complement(a: &BitWord) -> BitWord {
    increment(&ones_complement(a))
}

/// Compare two equal-width words bit by bit from the most significant
/// position, returning their relationship.
pub fn compare(a: &BitWord, b: &BitWord) -> Ordering {
    debug_assert_eq!(a.width(), b.width());

    for i in (0..a.width()).rev() {
        match a.get(i).to_u8().cmp(&b.get(i).to_u8()) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }

    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_basic() {
        let a = BitWord::from_u64(10, 4);
        let b = BitWord::from_u64(3, 4);
        let (result, carry) = add(&a, &b);

        assert_eq!(result.to_u64(), 13);
        assert!(carry.is_zero());
    }

    #[test]
    fn test_add_carry_out() {
        let a = BitWord::from_u64(15, 4);
        let b = BitWord::from_u64(1, 4);
        let (result, carry) = add(&a, &b);

        assert_eq!(result.to_u64(), 0);
        assert!(carry.is_one());
    }

    #[test]
    fn test_ones_complement() {
        let a = BitWord::parse("0011").unwrap();
        assert_eq!(format!("{}", ones_complement(&a)), "1100");
    }

    #[test]
    fn test_increment() {
        // Trailing ones flip to zero, the first zero becomes one
        let a = BitWord::parse("0111").unwrap();
        assert_eq!(format!("{}", increment(&a)), "1000");

        // All ones wraps to zero
        let b = BitWord::parse("1111").unwrap();
        assert!(increment(&b).is_zero());
    }

    #[test]
    fn test_twos_complement() {
        // -3 in 4-bit two's complement is 1101
        let a = BitWord::parse("0011").unwrap();
        assert_eq!(format!("{}", twos_complement(&a)), "1101");

        // Zero is its own two's complement
        let zero = BitWord::zero(4);
        assert!(twos_complement(&zero).is_zero());
    }

    #[test]
    fn test_twos_complement_cancels() {
        // a + twos_complement(a) = 0 (mod 2^width)
        for value in [1u64, 3, 10, 15] {
            let a = BitWord::from_u64(value, 4);
            let (result, carry) = add(&a, &twos_complement(&a));
            assert!(result.is_zero(), "Expected {} + complement = 0", value);
            assert!(carry.is_one());
        }
    }

    #[test]
    fn test_compare() {
        let a = BitWord::parse("1010").unwrap();
        let b = BitWord::parse("0011").unwrap();

        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_compare_equal_values_differ_only_in_low_bits() {
        let a = BitWord::parse("0110").unwrap();
        let b = BitWord::parse("0101").unwrap();
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }
}
