//! The two calculator operations built on the binary primitives.
//!
//! - [`add_digitwise`] - digit-wise ripple-carry addition of
//!   decimal-typed operands
//! - [`subtract`] - two's-complement subtraction of explicit bit words

pub mod adder;
pub mod subtractor;

pub use adder::add_digitwise;
pub use subtractor::{subtract, Subtraction, SubtractError};
