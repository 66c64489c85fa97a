//! Variable-width binary packets.
//!
//! A [`Packet`] is an owned sequence of bits stored most-significant bit
//! first. Its length is its width; there is no reserved sign bit, so every
//! packet is an unsigned magnitude in `[0, 2^width)`.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// An owned, big-endian sequence of bits.
///
/// Index 0 is the most significant bit. Adding bits on the left (see
/// [`Packet::zero_extend`]) never changes the value.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Packet {
    bits: Vec<bool>,
}

impl Packet {
    /// Create a packet from bits given most significant first.
    #[inline]
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create a packet by copying a slice of bits (MSB first).
    #[inline]
    pub fn from_bits(bits: &[bool]) -> Self {
        Self { bits: bits.to_vec() }
    }

    /// Create an all-zero packet of the given width.
    #[inline]
    pub fn zeros(width: usize) -> Self {
        Self { bits: vec![false; width] }
    }

    /// Width in bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Alias for [`Packet::width`].
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for a zero-width packet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrow the underlying bits (MSB first).
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Consume the packet and return its bits.
    #[inline]
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Get a single bit by index (0 = MSB).
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Check if every bit is zero. A zero-width packet counts as zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|bit| !bit)
    }

    /// Number of leading zero bits.
    pub fn leading_zeros(&self) -> usize {
        self.bits.iter().take_while(|bit| !**bit).count()
    }

    /// Return a copy widened to `width` by prepending zero bits.
    ///
    /// If the packet is already at least `width` bits wide it is returned
    /// unchanged; callers that must reject wider packets check first.
    pub fn zero_extend(&self, width: usize) -> Self {
        let pad = width.saturating_sub(self.bits.len());
        let mut bits = Vec::with_capacity(pad + self.bits.len());
        bits.resize(pad, false);
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }

    /// Parse from a string like `"0b0101"` or `"1111_0000"`.
    ///
    /// The `0b` prefix and `_` separators are optional.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        let s = s.strip_prefix("0b").unwrap_or(s);

        let mut bits = Vec::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                '_' => {}
                _ => return Err(ParseError::InvalidBit(c)),
            }
        }

        if bits.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(Self { bits })
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Packet(0b{}, {} bits)", self, self.width())
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl From<Vec<bool>> for Packet {
    fn from(bits: Vec<bool>) -> Self {
        Packet::new(bits)
    }
}

impl From<&[bool]> for Packet {
    fn from(bits: &[bool]) -> Self {
        Packet::from_bits(bits)
    }
}

impl FromStr for Packet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Packet::parse(s)
    }
}

/// Errors that can occur when parsing a packet from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no bits.
    #[error("no bits in input")]
    Empty,
    /// An invalid character was encountered.
    #[error("invalid bit character: '{0}' (expected 0 or 1)")]
    InvalidBit(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let packet = Packet::parse("0b0101").unwrap();
        assert_eq!(packet.bits(), &[false, true, false, true]);
        assert_eq!(packet.to_string(), "0101");

        let grouped: Packet = "1111_0000".parse().unwrap();
        assert_eq!(grouped.width(), 8);
        assert_eq!(grouped.to_string(), "11110000");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Packet::parse("0b"), Err(ParseError::Empty));
        assert_eq!(Packet::parse(""), Err(ParseError::Empty));
        assert_eq!(Packet::parse("0102"), Err(ParseError::InvalidBit('2')));
    }

    #[test]
    fn test_zero_extend_prepends() {
        let packet = Packet::parse("101").unwrap();
        let wide = packet.zero_extend(6);
        assert_eq!(wide.to_string(), "000101");
        // Input untouched
        assert_eq!(packet.to_string(), "101");
        // Never narrows
        assert_eq!(packet.zero_extend(2), packet);
    }

    #[test]
    fn test_is_zero_and_leading_zeros() {
        assert!(Packet::zeros(8).is_zero());
        assert!(Packet::default().is_zero());
        let packet = Packet::parse("00010").unwrap();
        assert!(!packet.is_zero());
        assert_eq!(packet.leading_zeros(), 3);
        assert_eq!(packet.get(3), Some(true));
        assert_eq!(packet.get(5), None);
    }

    #[test]
    fn test_serde_transparent() {
        let packet = Packet::parse("10").unwrap();
        let json = serde_json::to_string(&packet).unwrap();
        assert_eq!(json, "[true,false]");
        let back: Packet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, packet);
    }
}
