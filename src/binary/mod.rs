//! Binary arithmetic primitives.
//!
//! This module provides the core types for working with bit packets:
//! - [`Packet`] - An owned, big-endian sequence of bits of any width
//! - [`AluFlags`] - The status flags reported by each operation
//! - [`arith`] - Conversion, addition, subtraction and comparison

mod bit;
mod packet;
mod flags;
pub mod arith;

pub use bit::{full_add, full_sub};
pub use packet::{Packet, ParseError};
pub use flags::{AluFlags, Sign};
pub use arith::{
    add, subtract, compare_magnitude, normalize,
    to_decimal, from_decimal, from_decimal_exact,
    AluError, MAX_DECIMAL_WIDTH,
};
