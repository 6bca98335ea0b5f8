//! AWGN Channel
//!
//! Adds white Gaussian noise to a block of samples, calibrated so the noise
//! power hits a target signal-to-noise ratio measured against the block's
//! own average power:
//!
//! ```text
//! P = mean(|s|^2)            measured signal power
//! N = P / 10^(snr_db / 10)   total noise power per sample
//! ```
//!
//! Each noise value is complex with independent Gaussian real and imaginary
//! parts of variance `N/2`, so the total per-sample noise power is `N`. A
//! real-valued scheme receives the same complex noise and simply ignores
//! the imaginary part on the receive side.
//!
//! ## Example
//!
//! ```rust
//! use linklab_core::channel::apply_awgn;
//! use linklab_core::{IQSample, RandomSource};
//!
//! let signal = vec![IQSample::new(1.0, 0.0); 100];
//! let mut rng = RandomSource::new(7);
//! let noisy = apply_awgn(&signal, 20.0, &mut rng, false);
//! assert_eq!(noisy.len(), 100);
//! ```

use crate::random_source::RandomSource;
use crate::types::{average_power, IQSample};

/// Add AWGN to `samples` at the given SNR, drawing noise from `rng`.
///
/// Returns a new buffer of the same length; the input is not modified.
/// With `verbose` set, one `tracing` event reports the target SNR, the
/// measured signal and noise powers, and the applied per-component gain.
/// That event is observability only; nothing consumes it. The SNR value
/// itself is not validated.
pub fn apply_awgn(
    samples: &[IQSample],
    snr_db: f64,
    rng: &mut RandomSource,
    verbose: bool,
) -> Vec<IQSample> {
    if samples.is_empty() {
        return Vec::new();
    }

    let signal_power = average_power(samples);
    let noise_power = signal_power / 10f64.powf(snr_db / 10.0);
    let noise_gain = (noise_power / 2.0).sqrt();

    let noise: Vec<IQSample> = (0..samples.len())
        .map(|_| rng.complex_gaussian(noise_gain))
        .collect();

    if verbose {
        tracing::info!(
            snr_db,
            signal_power,
            noise_power = average_power(&noise),
            noise_gain,
            "awgn applied"
        );
    }

    samples.iter().zip(noise.iter()).map(|(&s, &n)| s + n).collect()
}

/// Convenience wrapper that draws from a throwaway source built from `seed`.
pub fn apply_awgn_seeded(samples: &[IQSample], snr_db: f64, seed: u64) -> Vec<IQSample> {
    let mut rng = RandomSource::new(seed);
    apply_awgn(samples, snr_db, &mut rng, false)
}
