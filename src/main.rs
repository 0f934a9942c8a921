//! Generate a synthetic test signal and dump it as 12-bit hex words.
//!
//! ```bash
//! sighex --signal-type sine --frequency 5 --noise 0.2 --output input_signal.txt
//! sighex --config gen.json --filter --plot signal.png --spectrum spectrum.png
//! ```
use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::info;
use sighex::config::GeneratorConfig;
use sighex::drivers::{
    render_spectrum_png, render_traces_png, GeneratedSignal, PlotStyle, SpectrumBuilder,
    WaveformKind,
};
use sighex::report;
#[derive(Parser, Debug)]
#[command(author, version, about = "Synthetic 12-bit test-signal generator", long_about = None)]
struct Args {
    /// JSON file with generator settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of samples across the unit time span (>= 2)
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Nominal sample rate in Hz (informational)
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Signal frequency in cycles per unit time
    #[arg(short, long, allow_hyphen_values = true)]
    frequency: Option<f64>,

    /// Standard deviation of the additive Gaussian noise
    #[arg(long, allow_hyphen_values = true)]
    noise: Option<f64>,

    /// Waveform: sine, cos, square, triangle, sawtooth, pulse, chirp
    #[arg(short = 't', long)]
    signal_type: Option<WaveformKind>,

    /// High fraction of each pulse period, in (0, 1)
    #[arg(long)]
    duty: Option<f64>,

    /// Float-to-count scale applied before truncation
    #[arg(long)]
    scale: Option<i32>,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Also run the 6-tap FIR low-pass and write the filtered dump
    #[arg(long, default_value_t = false)]
    filter: bool,

    /// Destination of the quantized hex dump
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Destination of the filtered hex dump
    #[arg(long)]
    filtered_output: Option<PathBuf>,

    /// Render clean/quantized/filtered traces to this PNG
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Render magnitude spectra to this PNG
    #[arg(long)]
    spectrum: Option<PathBuf>,

    /// How many leading samples to print
    #[arg(long, default_value_t = 10)]
    preview: usize,

    /// Verbosity level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}
impl Args {
    fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(v) = self.samples {
            cfg.sample_count = v;
        }
        if let Some(v) = self.sample_rate {
            cfg.sample_rate = v;
        }
        if let Some(v) = self.frequency {
            cfg.signal_frequency = v;
        }
        if let Some(v) = self.noise {
            cfg.noise_amplitude = v;
        }
        if let Some(v) = self.signal_type {
            cfg.signal_type = v;
        }
        if let Some(v) = self.duty {
            cfg.pulse_duty_cycle = v;
        }
        if let Some(v) = self.scale {
            cfg.scale = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.filter {
            cfg.filter_enabled = true;
        }
        if let Some(v) = &self.output {
            cfg.output_path = v.clone();
        }
        if let Some(v) = &self.filtered_output {
            cfg.filtered_output_path = v.clone();
        }
        Ok(cfg)
    }
}
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
fn render_plots(args: &Args, signal: &GeneratedSignal) -> Result<()> {
    let style = PlotStyle::default();
    if let Some(path) = &args.plot {
        let png = render_traces_png(&signal.trace_frame()?, &style)?;
        fs::write(path, png).with_context(|| format!("failed to write {}", path.display()))?;
        info!("trace plot written to {}", path.display());
    }
    if let Some(path) = &args.spectrum {
        let frame = signal.sample_frame()?;
        let spectrum = SpectrumBuilder::for_frame(&frame).compute(&frame)?;
        let png = render_spectrum_png(&spectrum, &style)?;
        fs::write(path, png).with_context(|| format!("failed to write {}", path.display()))?;
        info!("spectrum plot written to {}", path.display());
    }
    Ok(())
}
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = args.resolve_config()?;
    let mut pipeline = config
        .build_pipeline()
        .context("invalid generator configuration")?;
    info!(
        "generating {} {} samples (freq {}, noise {}, filter {})",
        config.sample_count,
        config.signal_type,
        config.signal_frequency,
        config.noise_amplitude,
        config.filter_enabled
    );
    let signal = pipeline.run(config.sample_count)?;
    signal
        .write_outputs(&config.output_path, config.filtered_output())
        .context("failed to write hex dump")?;
    println!("{}", report::summary(&config, &signal, args.preview));
    println!("Wrote {}", config.output_path.display());
    if let Some(path) = config.filtered_output() {
        println!("Wrote {}", path.display());
    }
    render_plots(&args, &signal)
}
