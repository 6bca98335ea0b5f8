//! Error-Rate Metrics
//!
//! Scores a link by comparing the transmitted and recovered symbol buffers:
//!
//! - **SER** (symbol error rate): fraction of positions where the symbols
//!   differ.
//! - **BER** (bit error rate): fraction of differing bits, with each symbol
//!   carrying `log2(M)` bits. Bit differences are exact population counts
//!   of `src XOR dst`, never an approximation.
//!
//! Both metrics are pure and symmetric in their arguments.
//!
//! ## Example
//!
//! ```rust
//! use linklab_core::metrics::{bit_error_rate, symbol_error_rate};
//!
//! let src = vec![0, 1, 2, 3];
//! let dst = vec![0, 1, 2, 0];
//! assert_eq!(symbol_error_rate(&src, &dst).unwrap(), 0.25);
//! // 3 vs 0 differs in two of the eight transmitted bits
//! assert_eq!(bit_error_rate(&src, &dst, 4).unwrap(), 0.25);
//! ```

use crate::types::{check_non_negative, order_bits, LinkError, LinkResult, Symbol};

/// Population-count strategy, selected once by the caller.
///
/// Both implementations are exact; `Portable` is the shift-and-mask fold
/// for targets where the intrinsic is unavailable or distrusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Popcount {
    /// Hardware/intrinsic `count_ones`.
    #[default]
    Native,
    /// Manual shift-and-mask bit fold.
    Portable,
}

impl Popcount {
    /// Number of set bits in `value`.
    #[inline]
    pub fn count(self, value: u64) -> u32 {
        match self {
            Popcount::Native => value.count_ones(),
            Popcount::Portable => {
                let mut v = value;
                let mut count = 0;
                while v != 0 {
                    count += (v & 1) as u32;
                    v >>= 1;
                }
                count
            }
        }
    }
}

fn check_same_shape(src: &[Symbol], dst: &[Symbol]) -> LinkResult<()> {
    if src.len() != dst.len() {
        return Err(LinkError::ShapeMismatch { src: src.len(), dst: dst.len() });
    }
    Ok(())
}

/// Fraction of positions where `src` and `dst` disagree.
///
/// Fails with [`LinkError::ShapeMismatch`] on unequal lengths. Empty
/// buffers score 0.0.
pub fn symbol_error_rate(src: &[Symbol], dst: &[Symbol]) -> LinkResult<f64> {
    check_same_shape(src, dst)?;
    if src.is_empty() {
        return Ok(0.0);
    }
    let errors = src.iter().zip(dst.iter()).filter(|(a, b)| a != b).count();
    Ok(errors as f64 / src.len() as f64)
}

/// Fraction of differing bits for symbols of modulation order `order`.
///
/// Fails with [`LinkError::ShapeMismatch`] on unequal lengths, with
/// [`LinkError::InvalidOrder`] unless `order` is a power of two at least 2,
/// and with [`LinkError::NegativeSymbol`] if either buffer holds a negative
/// value. Uses the default popcount strategy.
pub fn bit_error_rate(src: &[Symbol], dst: &[Symbol], order: u32) -> LinkResult<f64> {
    bit_error_rate_with(src, dst, order, Popcount::default())
}

/// [`bit_error_rate`] with an explicit popcount strategy.
pub fn bit_error_rate_with(
    src: &[Symbol],
    dst: &[Symbol],
    order: u32,
    popcount: Popcount,
) -> LinkResult<f64> {
    check_same_shape(src, dst)?;
    let bits = order_bits(order)?;
    check_non_negative(src)?;
    check_non_negative(dst)?;
    if src.is_empty() {
        return Ok(0.0);
    }
    let error_bits: u64 = src
        .iter()
        .zip(dst.iter())
        .map(|(&a, &b)| u64::from(popcount.count((a ^ b) as u64)))
        .sum();
    Ok(error_bits as f64 / (f64::from(bits) * src.len() as f64))
}
