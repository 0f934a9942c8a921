//! Synthetic test-signal generation for 12-bit hardware test benches.
//!
//! ```text
//!  waveform -> noise -> quantizer -> (FIR) -> hex dump
//! ```
//!
//! The numeric pipeline lives in [`drivers`]; [`config`] carries the run
//! parameters.
pub mod config;
pub mod drivers;
pub mod report;
pub use config::GeneratorConfig;
