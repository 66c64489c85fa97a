//! WebAssembly bindings for the packet ALU.
//!
//! Operands are passed as bit strings and results come back as JSON so the
//! JavaScript side does not need to know about [`Packet`].

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::{Packet, AluFlags};
use crate::binary::{add, subtract, compare_magnitude, normalize, to_decimal, from_decimal};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[derive(Serialize)]
struct ArithResult {
    bits: String,
    value: Option<u64>,
    flags: AluFlags,
}

#[derive(Serialize)]
struct CompareResult {
    greater: bool,
    flags: AluFlags,
}

fn js_err<E: std::fmt::Display>(e: E) -> JsError {
    JsError::new(&format!("{}", e))
}

fn parse(bits: &str) -> Result<Packet, JsError> {
    Packet::parse(bits).map_err(js_err)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(js_err)
}

fn arith_json(result: Packet, flags: AluFlags) -> Result<String, JsError> {
    to_json(&ArithResult {
        bits: result.to_string(),
        value: to_decimal(&result).ok(),
        flags,
    })
}

/// Add two bit strings into a `width`-bit result. Returns JSON.
#[wasm_bindgen]
pub fn wasm_add(a: &str, b: &str, width: usize) -> Result<String, JsError> {
    let (result, flags) = add(&parse(a)?, &parse(b)?, width).map_err(js_err)?;
    arith_json(result, flags)
}

/// Subtract `b` from `a` into a `width`-bit result. Returns JSON.
#[wasm_bindgen]
pub fn wasm_subtract(a: &str, b: &str, width: usize) -> Result<String, JsError> {
    let (result, flags) = subtract(&parse(a)?, &parse(b)?, width).map_err(js_err)?;
    arith_json(result, flags)
}

/// Compare two bit strings, widening the narrower one first. Returns JSON.
#[wasm_bindgen]
pub fn wasm_compare(a: &str, b: &str) -> Result<String, JsError> {
    let a = parse(a)?;
    let b = parse(b)?;
    let width = a.width().max(b.width());
    let a = normalize(&a, width).map_err(js_err)?;
    let b = normalize(&b, width).map_err(js_err)?;
    let (greater, flags) = compare_magnitude(&a, &b).map_err(js_err)?;
    to_json(&CompareResult { greater, flags })
}

/// Convert a bit string (at most 64 bits) to its value.
#[wasm_bindgen]
pub fn wasm_to_decimal(bits: &str) -> Result<u64, JsError> {
    to_decimal(&parse(bits)?).map_err(js_err)
}

/// Convert a value to a `width`-bit string.
#[wasm_bindgen]
pub fn wasm_from_decimal(value: u64, width: usize) -> Result<String, JsError> {
    let packet = from_decimal(value, width).map_err(js_err)?;
    Ok(packet.to_string())
}
