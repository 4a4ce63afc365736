//! Unsigned binary subtraction via two's-complement addition.
//!
//! The pipeline mirrors the paper method: check magnitudes, take the
//! two's complement of the subtrahend, then ripple-add it to the
//! minuend. Each phase produces a fresh value (input bits → complement
//! → sum); nothing is mutated across phases.

use std::cmp::Ordering;
use thiserror::Error;
use crate::binary::{arith, BitWord};

/// Successful subtraction outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtraction {
    /// The difference minuend - subtrahend.
    Difference(BitWord),
    /// Both operands were all-zero; the result is the all-zero word.
    BothZero(BitWord),
}

impl Subtraction {
    /// The result word, whichever way it was produced.
    pub fn word(&self) -> &BitWord {
        match self {
            Subtraction::Difference(word) | Subtraction::BothZero(word) => word,
        }
    }
}

/// Errors that make a subtraction unrepresentable in unsigned binary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubtractError {
    #[error("cannot subtract a larger number from a smaller one in unsigned binary")]
    Underflow,

    #[error("operand widths differ: minuend has {minuend} bits, subtrahend has {subtrahend}")]
    WidthMismatch { minuend: usize, subtrahend: usize },
}

/// Compute minuend - subtrahend for two equal-width unsigned words.
///
/// Equal operands subtract to zero; a subtrahend larger than the
/// minuend is rejected with [`SubtractError::Underflow`] and produces
/// no partial result.
pub fn subtract(minuend: &BitWord, subtrahend: &BitWord) -> Result<Subtraction, SubtractError> {
    if minuend.width() != subtrahend.width() {
        return Err(SubtractError::WidthMismatch {
            minuend: minuend.width(),
            subtrahend: subtrahend.width(),
        });
    }

    if minuend.is_zero() && subtrahend.is_zero() {
        return Ok(Subtraction::BothZero(BitWord::zero(minuend.width())));
    }

    if arith::compare(minuend, subtrahend) == Ordering::Less {
        return Err(SubtractError::Underflow);
    }

    let complement = arith::twos_complement(subtrahend);

    // The carry out of the top bit is the wraparound of the complement
    // encoding, not part of the difference.
    let (difference, _) = arith::add(minuend, &complement);

    Ok(Subtraction::Difference(difference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_difference() {
        // 10 - 3 = 7
        let a = BitWord::parse("1010").unwrap();
        let b = BitWord::parse("0011").unwrap();

        let result = subtract(&a, &b).unwrap();
        assert_eq!(format!("{}", result.word()), "0111");
    }

    #[test]
    fn test_underflow_rejected() {
        // 2 - 4 has no unsigned representation
        let a = BitWord::parse("010").unwrap();
        let b = BitWord::parse("100").unwrap();

        assert_eq!(subtract(&a, &b), Err(SubtractError::Underflow));
    }

    #[test]
    fn test_both_zero() {
        let zero = BitWord::zero(4);

        let result = subtract(&zero, &zero).unwrap();
        assert!(matches!(result, Subtraction::BothZero(_)));
        assert_eq!(format!("{}", result.word()), "0000");
    }

    #[test]
    fn test_equal_operands() {
        let a = BitWord::parse("0110").unwrap();

        let result = subtract(&a, &a).unwrap();
        assert!(matches!(result, Subtraction::Difference(_)));
        assert!(result.word().is_zero());
    }

    #[test]
    fn test_width_mismatch() {
        let a = BitWord::parse("1010").unwrap();
        let b = BitWord::parse("011").unwrap();

        assert_eq!(
            subtract(&a, &b),
            Err(SubtractError::WidthMismatch { minuend: 4, subtrahend: 3 })
        );
    }

    #[test]
    fn test_result_keeps_width() {
        let a = BitWord::parse("00001000").unwrap();
        let b = BitWord::parse("00000001").unwrap();

        let result = subtract(&a, &b).unwrap();
        assert_eq!(result.word().width(), 8);
        assert_eq!(format!("{}", result.word()), "00000111");
    }

    proptest! {
        #[test]
        fn subtract_then_add_restores_minuend(x in 0u64..65536, y in 0u64..65536) {
            let (hi, lo) = if x >= y { (x, y) } else { (y, x) };
            let minuend = BitWord::from_u64(hi, 16);
            let subtrahend = BitWord::from_u64(lo, 16);

            let difference = subtract(&minuend, &subtrahend).unwrap();
            let (restored, _) = arith::add(difference.word(), &subtrahend);

            prop_assert_eq!(restored, minuend);
        }

        #[test]
        fn difference_matches_integer_subtraction(x in 0u64..65536, y in 0u64..65536) {
            let (hi, lo) = if x >= y { (x, y) } else { (y, x) };
            let minuend = BitWord::from_u64(hi, 16);
            let subtrahend = BitWord::from_u64(lo, 16);

            let difference = subtract(&minuend, &subtrahend).unwrap();
            prop_assert_eq!(difference.word().to_u64(), hi - lo);
        }
    }
}
