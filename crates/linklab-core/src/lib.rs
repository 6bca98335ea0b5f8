//! # LinkLab Core
//!
//! A didactic baseband link simulator. Integer symbols are (optionally)
//! Gray-coded, mapped onto a modulation constellation, pushed through an
//! additive-white-Gaussian-noise channel, demapped, and scored with symbol-
//! and bit-error-rate metrics.
//!
//! ## Signal Flow
//!
//! ```text
//! symbols ──► [Gray encode] ──► [ASK / QAM map] ──► samples
//!                                                      │
//!                                                   [AWGN]
//!                                                      │
//! SER/BER ◄── [Gray decode] ◄── [demap + clamp] ◄── noisy samples
//! ```
//!
//! Two constellation families are provided: a uniform real-axis amplitude
//! ladder ([`AskModem`]) and square-grid QAM over the unit square
//! ([`QamModem`]). The trial driver composes the whole chain and sweeps it
//! across SNR values and modulation orders, truncating each curve once the
//! bit error rate falls under a configurable floor.
//!
//! Everything is synchronous and batch-oriented: each stage maps a whole
//! symbol or sample buffer in one pass, and all randomness flows through an
//! injected [`RandomSource`] so seeded runs reproduce exactly.
//!
//! ## Example
//!
//! ```rust
//! use linklab_core::{run_trial, RandomSource, Scheme, TrialConfig};
//!
//! let config = TrialConfig {
//!     scheme: Scheme::Qam,
//!     order: 16,
//!     snr_db: 30.0,
//!     sample_count: 1000,
//!     use_gray: true,
//! };
//! let mut rng = RandomSource::new(42);
//! let result = run_trial(&config, &mut rng).unwrap();
//! // 16-QAM at 30 dB is essentially error-free
//! assert_eq!(result.ser, 0.0);
//! ```

pub mod ask;
pub mod channel;
pub mod gray;
pub mod metrics;
pub mod qam;
pub mod random_source;
pub mod trial;
pub mod types;

// Re-export main types
pub use ask::AskModem;
pub use channel::{apply_awgn, apply_awgn_seeded};
pub use metrics::{bit_error_rate, bit_error_rate_with, symbol_error_rate, Popcount};
pub use qam::QamModem;
pub use random_source::RandomSource;
pub use trial::{
    run_trial, snr_steps, sweep, Scheme, SweepConfig, SweepPoint, SweepSeries, TrialConfig,
    TrialResult,
};
pub use types::{IQBuffer, IQSample, LinkError, LinkResult, Symbol, SymbolBuffer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ask::AskModem;
    pub use crate::channel::apply_awgn;
    pub use crate::metrics::{bit_error_rate, symbol_error_rate};
    pub use crate::qam::QamModem;
    pub use crate::random_source::RandomSource;
    pub use crate::trial::{run_trial, sweep, Scheme, SweepConfig, TrialConfig};
    pub use crate::types::{IQSample, LinkError, LinkResult, Symbol};
}
