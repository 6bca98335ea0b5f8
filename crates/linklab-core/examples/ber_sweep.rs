//! # BER Sweep Example
//!
//! Prints the Gray code table, then sweeps SNR for ASK and square-grid QAM
//! at several modulation orders and emits the recorded (snr, ser, ber)
//! points as CSV for an external plotting layer.
//!
//! Run with: cargo run --example ber_sweep -p linklab-core

use linklab_core::{gray, sweep, RandomSource, Scheme, SweepConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("DEC,   BIN =>  GRAY => DEC");
    for (binary, gray_value, binary_str, gray_str) in gray::table(5) {
        let decoded = gray::decode_one(gray_value).expect("table values are non-negative");
        println!(" {binary:>2}, {binary_str} => {gray_str} => {decoded:>2}");
    }
    println!();

    let mut rng = RandomSource::new(42);
    for scheme in [Scheme::Ask, Scheme::Qam] {
        for use_gray in [false, true] {
            let config = SweepConfig { scheme, use_gray, ..Default::default() };
            let series = sweep(&config, &mut rng).expect("sweep failed");
            for s in &series {
                println!("# {scheme:?} order {} gray={use_gray}", s.order);
                print!("{}", s.to_csv());
                println!();
            }
        }
    }
}
