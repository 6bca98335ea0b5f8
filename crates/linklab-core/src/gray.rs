//! Reflected-Binary (Gray) Coding
//!
//! Gray code is a bijective integer encoding in which consecutive values
//! differ in exactly one bit. Mapping symbols through it before modulation
//! means that a decision error landing on an adjacent constellation point
//! costs one bit instead of potentially many.
//!
//! ```text
//! Binary  Gray
//! 000     000
//! 001     001
//! 010     011
//! 011     010
//! 100     110
//! ...
//! ```
//!
//! Encoding is the single pass `g = n ^ (n >> 1)`. Decoding undoes the
//! reflected cascade by repeatedly XOR-folding the value with its own right
//! shift; on a buffer this runs as `O(log2 max)` whole-array passes rather
//! than a per-bit loop over each element.
//!
//! The slice functions are the single algorithmic path; [`encode_one`] and
//! [`decode_one`] wrap the one-element case. Negative inputs are rejected
//! up front, before any output is produced.
//!
//! ## Example
//!
//! ```rust
//! use linklab_core::gray;
//!
//! let coded = gray::encode(&[0, 1, 2, 3]).unwrap();
//! assert_eq!(coded, vec![0, 1, 3, 2]);
//! assert_eq!(gray::decode(&coded).unwrap(), vec![0, 1, 2, 3]);
//! ```

use crate::types::{check_non_negative, LinkResult, Symbol};

/// Gray-encode a buffer of symbols.
///
/// Fails with [`crate::LinkError::NegativeSymbol`] if any element is
/// negative; validation happens before any element is transformed.
pub fn encode(values: &[Symbol]) -> LinkResult<Vec<Symbol>> {
    check_non_negative(values)?;
    Ok(values.iter().map(|&v| v ^ (v >> 1)).collect())
}

/// Gray-decode a buffer of symbols.
///
/// Same input contract as [`encode`]. The caller's slice is never mutated;
/// the XOR fold runs on a private copy.
pub fn decode(values: &[Symbol]) -> LinkResult<Vec<Symbol>> {
    check_non_negative(values)?;
    let mut out = values.to_vec();
    decode_in_place(&mut out);
    Ok(out)
}

/// Gray-encode a single symbol.
pub fn encode_one(value: Symbol) -> LinkResult<Symbol> {
    Ok(encode(std::slice::from_ref(&value))?[0])
}

/// Gray-decode a single symbol.
pub fn decode_one(value: Symbol) -> LinkResult<Symbol> {
    Ok(decode(std::slice::from_ref(&value))?[0])
}

/// XOR-fold decode over a whole buffer. Values must be non-negative.
pub(crate) fn decode_in_place(values: &mut [Symbol]) {
    let mut masks: Vec<Symbol> = values.iter().map(|&v| v >> 1).collect();
    while masks.iter().any(|&m| m != 0) {
        for (value, mask) in values.iter_mut().zip(masks.iter_mut()) {
            *value ^= *mask;
            *mask >>= 1;
        }
    }
}

/// Binary/Gray conversion table for the given bit width (for display).
///
/// Each row is `(binary, gray, binary_string, gray_string)`.
pub fn table(bits: u32) -> Vec<(Symbol, Symbol, String, String)> {
    let size = 1i64 << bits;
    let width = bits as usize;
    (0..size)
        .map(|n| {
            let gray = n ^ (n >> 1);
            (n, gray, format!("{n:0width$b}"), format!("{gray:0width$b}"))
        })
        .collect()
}
