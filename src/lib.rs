//! # Packet ALU
//!
//! The arithmetic core of a software CPU emulator.
//!
//! Numbers are explicit sequences of bits of any width rather than native
//! machine words. The core adds, subtracts, compares and converts them
//! while reporting status flags (negative, zero, positive, overflow) the
//! way a hardware ALU status register would.

pub mod binary;
pub mod host;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use binary::{Packet, AluFlags, Sign, AluError, ParseError};
pub use binary::{add, subtract, compare_magnitude, to_decimal, from_decimal, from_decimal_exact};
pub use host::{open_packets, PacketReader, HostError};
