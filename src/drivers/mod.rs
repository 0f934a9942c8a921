// src/drivers/mod.rs
// Numeric core first, then the plotting helpers that only consume its output.
pub mod error;
pub mod fft;
pub mod fir;
pub mod frame;
pub mod hex;
pub mod noise;
pub mod pipeline;
pub mod plot;
pub mod quantize;
pub mod waveform;
pub use error::SignalError;
pub use fft::{FrequencySpectrum, SpectrumBuilder};
pub use fir::{FirKernel, DEFAULT_LOWPASS_WEIGHTS};
pub use frame::TraceFrame;
pub use hex::{decode, encode, read_hex_file, write_hex_file};
pub use noise::{add_noise, NoiseInjector};
pub use pipeline::{FilteredSignal, GeneratedSignal, SignalPipeline};
pub use plot::{render_spectrum_png, render_traces_png, PlotStyle};
pub use quantize::{quantize, Quantizer, DEFAULT_SCALE, SAMPLE_MAX, SAMPLE_MIN};
pub use waveform::{generate, time_base, WaveformGenerator, WaveformKind};
