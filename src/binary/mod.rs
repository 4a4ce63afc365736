//! Binary number system primitives.
//!
//! This module provides the core types for working with unsigned binary:
//! - [`Bit`] - A single binary digit (0 or 1)
//! - [`BitWord`] - An explicitly sized sequence of bits (up to 32)

mod bit;
mod word;
pub mod arith;

pub use bit::Bit;
pub use word::{BitWord, ParseError};
pub use arith::{add, compare, ones_complement, twos_complement};
