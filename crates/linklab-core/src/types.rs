//! Core types for the link simulator
//!
//! Defines the sample and symbol representations shared by every pipeline
//! stage, the crate-wide error type, and small helpers for signal power and
//! modulation-order validation.
//!
//! ## Symbols and samples
//!
//! A symbol is one unit of transmitted information, an integer in
//! `[0, M)` where `M` is the modulation order. Symbols are carried as
//! `i64` so that out-of-domain (negative) inputs can be rejected with an
//! error instead of silently wrapping in an unsigned type.
//!
//! Samples are complex baseband I/Q values. A real-only scheme (such as the
//! amplitude ladder in [`crate::ask`]) still produces complex samples with a
//! zero imaginary part, so the whole pipeline shares one sample type.

use num_complex::Complex64;

/// A single complex I/Q sample.
pub type IQSample = Complex64;

/// A buffer of I/Q samples.
pub type IQBuffer = Vec<IQSample>;

/// A modulation symbol. Valid values are non-negative integers in `[0, M)`.
pub type Symbol = i64;

/// A buffer of symbols.
pub type SymbolBuffer = Vec<Symbol>;

/// Result type for link-simulation operations.
pub type LinkResult<T> = Result<T, LinkError>;

/// Errors raised at precondition violations.
///
/// Every variant is raised synchronously at the point of the check, before
/// any output is produced or any random variate is drawn; nothing is
/// retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("negative symbol value {value} at index {index}")]
    NegativeSymbol { value: Symbol, index: usize },

    #[error("invalid modulation order {0}: must be a power of two >= 2")]
    InvalidOrder(u32),

    #[error("modulation order {0} has an odd number of bits per symbol; a square constellation needs an even count")]
    OddOrderBits(u32),

    #[error("shape mismatch: src has {src} elements, dst has {dst}")]
    ShapeMismatch { src: usize, dst: usize },
}

/// Validate a modulation order and return its bits per symbol.
///
/// The order must be a power of two and at least 2.
pub fn order_bits(order: u32) -> LinkResult<u32> {
    if order < 2 || !order.is_power_of_two() {
        return Err(LinkError::InvalidOrder(order));
    }
    Ok(order.trailing_zeros())
}

/// Average power of a signal, `mean(|s|^2)`.
pub fn average_power(samples: &[IQSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s.norm_sqr()).sum::<f64>() / samples.len() as f64
}

/// Reject buffers containing negative symbol values.
pub(crate) fn check_non_negative(values: &[Symbol]) -> LinkResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if value < 0 {
            return Err(LinkError::NegativeSymbol { value, index });
        }
    }
    Ok(())
}
