//! Single-bit adder and subtractor cells.
//!
//! These are the building blocks the ripple-carry and ripple-borrow
//! loops in [`arith`](crate::binary::arith) chain together. Both are
//! written as explicit truth tables over `(a, b, carry_in)`.

/// Full adder: adds three bits, returns `(sum, carry_out)`.
///
/// `sum = (a + b + c) mod 2`, `carry_out = (a + b + c) >= 2`.
#[inline]
pub const fn full_add(a: bool, b: bool, carry_in: bool) -> (bool, bool) {
    match (a, b, carry_in) {
        (false, false, false) => (false, false),
        (false, false, true) | (false, true, false) | (true, false, false) => (true, false),
        (false, true, true) | (true, false, true) | (true, true, false) => (false, true),
        (true, true, true) => (true, true),
    }
}

/// Full subtractor: computes `a - b - borrow_in`, returns `(difference, borrow_out)`.
///
/// The difference bit is the true difference modulo 2 and a borrow is
/// taken whenever the true difference is negative.
#[inline]
pub const fn full_sub(a: bool, b: bool, borrow_in: bool) -> (bool, bool) {
    match (a, b, borrow_in) {
        // 0
        (false, false, false) | (true, true, false) | (true, false, true) => (false, false),
        // +1
        (true, false, false) => (true, false),
        // -1
        (false, true, false) | (false, false, true) | (true, true, true) => (true, true),
        // -2
        (false, true, true) => (false, true),
    }
}
