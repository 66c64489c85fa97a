//! Multi-bit arithmetic on packets.
//!
//! Provides decimal conversion, addition, subtraction and magnitude
//! comparison using ripple-carry / ripple-borrow loops over
//! [`full_add`] and [`full_sub`]. Addition and subtraction are not limited
//! to 64 bits; only the decimal conversions are.

use crate::binary::bit::{full_add, full_sub};
use crate::binary::{AluFlags, Packet, Sign};
use log::{debug, trace};
use thiserror::Error;

/// Widest packet that converts to or from a `u64`.
pub const MAX_DECIMAL_WIDTH: usize = 64;

/// Errors raised by the arithmetic core.
///
/// These all signal a caller mistake; no operation produces a partial
/// result when it fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AluError {
    #[error("width {width} exceeds the limit of {limit} bits")]
    WidthOverflow { width: usize, limit: usize },

    #[error("value {value} does not fit in {width} bits")]
    ValueTruncated { value: u64, width: usize },

    #[error("cannot compare packets of different widths ({left} and {right} bits)")]
    WidthMismatch { left: usize, right: usize },
}

/// Convert a packet to its unsigned value.
///
/// Packets wider than 64 bits are rejected; an empty packet is 0.
pub fn to_decimal(bits: &Packet) -> Result<u64, AluError> {
    if bits.width() > MAX_DECIMAL_WIDTH {
        return Err(AluError::WidthOverflow { width: bits.width(), limit: MAX_DECIMAL_WIDTH });
    }

    let value = bits
        .bits()
        .iter()
        .fold(0u64, |acc, &bit| (acc << 1) | bit as u64);
    Ok(value)
}

/// Convert a value to a packet of exactly `width` bits.
///
/// Bits above `width` are dropped, so the result holds `value mod 2^width`.
/// Use [`from_decimal_exact`] to reject values that do not fit.
pub fn from_decimal(value: u64, width: usize) -> Result<Packet, AluError> {
    if width > MAX_DECIMAL_WIDTH {
        return Err(AluError::WidthOverflow { width, limit: MAX_DECIMAL_WIDTH });
    }

    let mut bits = vec![false; width];
    let mut rest = value;
    for slot in bits.iter_mut().rev() {
        *slot = rest & 1 == 1;
        rest >>= 1;
    }

    if rest != 0 {
        debug!("from_decimal: {} truncated to {} bits", value, width);
    }
    Ok(Packet::new(bits))
}

/// Like [`from_decimal`], but fails with [`AluError::ValueTruncated`]
/// instead of dropping high bits.
pub fn from_decimal_exact(value: u64, width: usize) -> Result<Packet, AluError> {
    if width > MAX_DECIMAL_WIDTH {
        return Err(AluError::WidthOverflow { width, limit: MAX_DECIMAL_WIDTH });
    }
    if width < MAX_DECIMAL_WIDTH && value >> width != 0 {
        return Err(AluError::ValueTruncated { value, width });
    }
    from_decimal(value, width)
}

/// Zero-extend an operand to `output_width` bits.
///
/// Fails if the operand is already wider than `output_width`.
pub fn normalize(operand: &Packet, output_width: usize) -> Result<Packet, AluError> {
    if operand.width() > output_width {
        return Err(AluError::WidthOverflow { width: operand.width(), limit: output_width });
    }
    Ok(operand.zero_extend(output_width))
}

/// Add two packets into an `output_width`-bit result.
///
/// Overflow is reported when a carry remains after the most significant
/// bit. Addition is unsigned: the sign is zero or positive, never negative.
pub fn add(a: &Packet, b: &Packet, output_width: usize) -> Result<(Packet, AluFlags), AluError> {
    let a = normalize(a, output_width)?;
    let b = normalize(b, output_width)?;

    let mut result = vec![false; output_width];
    let mut carry = false;

    for i in (0..output_width).rev() {
        let (sum, carry_out) = full_add(a.bits()[i], b.bits()[i], carry);
        result[i] = sum;
        carry = carry_out;
    }

    let result = Packet::new(result);
    let sign = if result.is_zero() { Sign::Zero } else { Sign::Positive };
    let flags = AluFlags::new(sign, carry);

    trace!("add {} + {} = {} [{}]", a, b, result, flags);
    if carry {
        debug!("add overflowed {} bits", output_width);
    }

    Ok((result, flags))
}

/// Subtract `b` from `a` into an `output_width`-bit result.
///
/// The result is `a - b` modulo `2^output_width`. Overflow is reported when
/// a borrow remains after the most significant bit. The sign flags come
/// from [`compare_magnitude`] on the same widened operands.
pub fn subtract(a: &Packet, b: &Packet, output_width: usize) -> Result<(Packet, AluFlags), AluError> {
    let a = normalize(a, output_width)?;
    let b = normalize(b, output_width)?;

    let mut result = vec![false; output_width];
    let mut borrow = false;

    for i in (0..output_width).rev() {
        let (diff, borrow_out) = full_sub(a.bits()[i], b.bits()[i], borrow);
        result[i] = diff;
        borrow = borrow_out;
    }

    let (_, comparison) = compare_magnitude(&a, &b)?;
    let result = Packet::new(result);
    let flags = AluFlags::new(comparison.sign, borrow);

    trace!("subtract {} - {} = {} [{}]", a, b, result, flags);
    if borrow {
        debug!("subtract underflowed {} bits", output_width);
    }

    Ok((result, flags))
}

/// Compare two packets of equal width.
///
/// Returns `true` iff `a > b`. The flags report `positive` for `a > b`,
/// `negative` for `a < b` and `zero` when the packets are equal. Operands
/// are not widened here; callers normalize them first.
pub fn compare_magnitude(a: &Packet, b: &Packet) -> Result<(bool, AluFlags), AluError> {
    if a.width() != b.width() {
        return Err(AluError::WidthMismatch { left: a.width(), right: b.width() });
    }

    let first_difference = a
        .bits()
        .iter()
        .zip(b.bits())
        .find(|(x, y)| x != y);

    let sign = match first_difference {
        Some((true, false)) => Sign::Positive,
        Some(_) => Sign::Negative,
        None => Sign::Zero,
    };

    Ok((sign == Sign::Positive, AluFlags::new(sign, false)))
}
