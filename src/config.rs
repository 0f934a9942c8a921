use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use crate::drivers::{
    FirKernel, NoiseInjector, Quantizer, SignalError, SignalPipeline, WaveformGenerator,
    WaveformKind, DEFAULT_SCALE,
};
/// Settings for one generation run, validated before any pipeline stage is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sample_count: usize,
    /// Informational only; the time base always spans [0, 1].
    pub sample_rate: f64,
    pub signal_frequency: f64,
    pub noise_amplitude: f64,
    pub signal_type: WaveformKind,
    pub pulse_duty_cycle: f64,
    pub filter_enabled: bool,
    pub scale: i32,
    pub seed: Option<u64>,
    pub output_path: PathBuf,
    pub filtered_output_path: PathBuf,
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            sample_rate: 1000.0,
            signal_frequency: 5.0,
            noise_amplitude: 0.2,
            signal_type: WaveformKind::Sine,
            pulse_duty_cycle: 0.3,
            filter_enabled: false,
            scale: DEFAULT_SCALE,
            seed: None,
            output_path: PathBuf::from("input_signal.txt"),
            filtered_output_path: PathBuf::from("filtered_signal.txt"),
        }
    }
}
impl GeneratorConfig {
    /// Defaults overlaid with whatever fields the JSON file sets.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.sample_count < 2 {
            return Err(SignalError::invalid(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if !self.signal_frequency.is_finite() {
            return Err(SignalError::invalid(format!(
                "signal_frequency must be finite, got {}",
                self.signal_frequency
            )));
        }
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(SignalError::invalid(format!(
                "noise_amplitude must be >= 0, got {}",
                self.noise_amplitude
            )));
        }
        if !(self.pulse_duty_cycle > 0.0 && self.pulse_duty_cycle < 1.0) {
            return Err(SignalError::invalid(format!(
                "pulse_duty_cycle must lie in (0, 1), got {}",
                self.pulse_duty_cycle
            )));
        }
        if self.scale <= 0 {
            return Err(SignalError::invalid(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            warn!("sample_rate {} is not a positive rate; it is informational only", self.sample_rate);
        }
        Ok(())
    }
    pub fn build_pipeline(&self) -> Result<SignalPipeline, SignalError> {
        self.validate()?;
        let generator = WaveformGenerator::with_duty(
            self.signal_type,
            self.signal_frequency,
            self.pulse_duty_cycle,
        )?;
        let noise = NoiseInjector::new(self.noise_amplitude, self.seed)?;
        let quantizer = Quantizer::with_scale(self.scale)?;
        let filter = self.filter_enabled.then(FirKernel::default);
        Ok(SignalPipeline::new(generator, noise, quantizer, filter))
    }
    pub fn filtered_output(&self) -> Option<&Path> {
        self.filter_enabled
            .then_some(self.filtered_output_path.as_path())
    }
}
