//! Amplitude-Shift Keying (uniform amplitude ladder)
//!
//! Maps an M-ary symbol onto a ladder of M evenly spaced real amplitudes in
//! `[0, 1]`:
//!
//! ```text
//! s ∈ [0, M)  →  (gray)  →  s / (M - 1)  →  real axis of an I/Q sample
//! ```
//!
//! The receive side quantizes the real part back to the nearest rung and
//! clamps into `[0, M-1]`, so arbitrarily bad noise still yields a valid
//! symbol. Historically this mapping was labeled "PSK" in the lab material
//! it reproduces; it keys amplitude on one axis, not phase, so it is named
//! ASK here. The imaginary part is carried as zero through the channel and
//! ignored on receive.
//!
//! ## Example
//!
//! ```rust
//! use linklab_core::AskModem;
//!
//! let modem = AskModem::new(4, true).unwrap();
//! let samples = modem.modulate(&[0, 1, 2, 3]).unwrap();
//! assert_eq!(modem.demodulate(&samples), vec![0, 1, 2, 3]);
//! ```

use crate::gray;
use crate::types::{order_bits, IQSample, LinkResult, Symbol};

/// Amplitude-ladder modulator/demodulator.
#[derive(Debug, Clone)]
pub struct AskModem {
    order: u32,
    bits: u32,
    use_gray: bool,
}

impl AskModem {
    /// Create a modem for the given modulation order.
    ///
    /// Fails with [`crate::LinkError::InvalidOrder`] unless `order` is a
    /// power of two and at least 2. Validation lives here, ahead of any
    /// random draw a trial makes, so a bad order is side-effect-free.
    pub fn new(order: u32, use_gray: bool) -> LinkResult<Self> {
        let bits = order_bits(order)?;
        Ok(Self { order, bits, use_gray })
    }

    /// Modulation order M.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Bits carried per symbol, `log2(M)`.
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits
    }

    /// Whether symbols pass through the Gray coder.
    pub fn uses_gray(&self) -> bool {
        self.use_gray
    }

    /// Map symbols to amplitude samples.
    ///
    /// Propagates the Gray coder's negative-input error when Gray coding is
    /// enabled. Values at or above M are not rejected; they map above the
    /// top rung and the receive-side clamp brings them back, matching the
    /// source behavior.
    pub fn modulate(&self, symbols: &[Symbol]) -> LinkResult<Vec<IQSample>> {
        let coded = if self.use_gray {
            gray::encode(symbols)?
        } else {
            symbols.to_vec()
        };
        let scale = (self.order - 1) as f64;
        Ok(coded
            .iter()
            .map(|&s| IQSample::new(s as f64 / scale, 0.0))
            .collect())
    }

    /// Recover symbols from (noisy) samples.
    ///
    /// Rounds the real part to the nearest rung, clamps into `[0, M-1]`,
    /// then undoes the Gray coding if enabled. Total over any input.
    pub fn demodulate(&self, samples: &[IQSample]) -> Vec<Symbol> {
        let top = (self.order - 1) as f64;
        let mut symbols: Vec<Symbol> = samples
            .iter()
            .map(|s| (s.re * top).round().clamp(0.0, top) as Symbol)
            .collect();
        if self.use_gray {
            gray::decode_in_place(&mut symbols);
        }
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::apply_awgn;
    use crate::random_source::RandomSource;
    use crate::types::LinkError;

    #[test]
    fn test_invalid_order_rejected() {
        for order in [0u32, 1, 3, 6, 12] {
            assert_eq!(
                AskModem::new(order, false).unwrap_err(),
                LinkError::InvalidOrder(order)
            );
        }
    }

    #[test]
    fn test_amplitudes_span_unit_interval() {
        let modem = AskModem::new(4, false).unwrap();
        let samples = modem.modulate(&[0, 1, 2, 3]).unwrap();
        let re: Vec<f64> = samples.iter().map(|s| s.re).collect();
        assert_eq!(re, vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
        assert!(samples.iter().all(|s| s.im == 0.0));
    }

    #[test]
    fn test_noiseless_roundtrip() {
        for order in [2u32, 4, 16, 64] {
            for use_gray in [false, true] {
                let modem = AskModem::new(order, use_gray).unwrap();
                let symbols: Vec<Symbol> = (0..i64::from(order)).collect();
                let samples = modem.modulate(&symbols).unwrap();
                assert_eq!(
                    modem.demodulate(&samples),
                    symbols,
                    "roundtrip failed for order {order}, gray={use_gray}"
                );
            }
        }
    }

    #[test]
    fn test_high_snr_channel_roundtrip() {
        let mut rng = RandomSource::new(42);
        for order in [4u32, 16, 64] {
            let modem = AskModem::new(order, true).unwrap();
            let symbols = rng.symbols(order, 1000).unwrap();
            let tx = modem.modulate(&symbols).unwrap();
            let rx = apply_awgn(&tx, 60.0, &mut rng, false);
            assert_eq!(
                modem.demodulate(&rx),
                symbols,
                "60 dB roundtrip failed for order {order}"
            );
        }
    }

    #[test]
    fn test_gray_flag_changes_mapping() {
        let plain = AskModem::new(4, false).unwrap();
        let gray = AskModem::new(4, true).unwrap();
        // 3 gray-encodes to 2, so the top symbol lands on a lower rung.
        let a = plain.modulate(&[3]).unwrap();
        let b = gray.modulate(&[3]).unwrap();
        assert_ne!(a[0].re, b[0].re);
    }

    #[test]
    fn test_negative_symbol_with_gray_rejected() {
        let modem = AskModem::new(8, true).unwrap();
        assert_eq!(
            modem.modulate(&[2, -1]).unwrap_err(),
            LinkError::NegativeSymbol { value: -1, index: 1 }
        );
    }

    #[test]
    fn test_demodulate_clamps_outliers() {
        let modem = AskModem::new(4, false).unwrap();
        let wild = vec![IQSample::new(-3.0, 0.0), IQSample::new(7.5, 0.0)];
        assert_eq!(modem.demodulate(&wild), vec![0, 3]);
    }

    #[test]
    fn test_accessors() {
        let modem = AskModem::new(16, true).unwrap();
        assert_eq!(modem.order(), 16);
        assert_eq!(modem.bits_per_symbol(), 4);
        assert!(modem.uses_gray());
    }
}
