//! # Ripple Calc
//!
//! An unsigned binary ripple-carry calculator.
//!
//! Binary numbers are handled as explicit arrays of digits: addition
//! propagates a carry from the least significant position upward, and
//! subtraction is performed by adding the two's complement of the
//! subtrahend. Built for studying how arithmetic units do it, not for
//! speed.

pub mod binary;
pub mod calc;

// Re-export commonly used types
pub use binary::{Bit, BitWord, ParseError};
pub use calc::{add_digitwise, subtract, Subtraction, SubtractError};
