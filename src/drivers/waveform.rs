use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::drivers::SignalError;
/// Default high fraction of each period for [`WaveformKind::Pulse`].
pub const PULSE_DEFAULT_DUTY: f64 = 0.3;
/// Fixed sweep endpoints of the linear chirp, in cycles per unit time.
pub const CHIRP_START_HZ: f64 = 1.0;
pub const CHIRP_END_HZ: f64 = 20.0;
/// Supported waveform families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WaveformKind {
    Sine,
    Cos,
    Square,
    Triangle,
    Sawtooth,
    Pulse,
    Chirp,
}
impl WaveformKind {
    pub const ALL: [WaveformKind; 7] = [
        WaveformKind::Sine,
        WaveformKind::Cos,
        WaveformKind::Square,
        WaveformKind::Triangle,
        WaveformKind::Sawtooth,
        WaveformKind::Pulse,
        WaveformKind::Chirp,
    ];
    pub fn name(self) -> &'static str {
        match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Cos => "cos",
            WaveformKind::Square => "square",
            WaveformKind::Triangle => "triangle",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::Pulse => "pulse",
            WaveformKind::Chirp => "chirp",
        }
    }
    fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for WaveformKind {
    type Err = SignalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(WaveformKind::Sine),
            "cos" | "cosine" => Ok(WaveformKind::Cos),
            "square" => Ok(WaveformKind::Square),
            "triangle" => Ok(WaveformKind::Triangle),
            "sawtooth" => Ok(WaveformKind::Sawtooth),
            "pulse" => Ok(WaveformKind::Pulse),
            "chirp" => Ok(WaveformKind::Chirp),
            other => Err(SignalError::invalid(format!(
                "unsupported signal type '{other}'; expected one of: {}",
                Self::supported_list()
            ))),
        }
    }
}
impl TryFrom<String> for WaveformKind {
    type Error = SignalError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<WaveformKind> for String {
    fn from(value: WaveformKind) -> Self {
        value.name().to_owned()
    }
}
/// `n` uniformly spaced instants covering [0, 1], both ends included.
pub fn time_base(n: usize) -> Result<Vec<f64>, SignalError> {
    if n < 2 {
        return Err(SignalError::invalid(format!(
            "sample count must be at least 2, got {n}"
        )));
    }
    let step = 1.0 / (n - 1) as f64;
    let mut t: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
    // Pin the end point so rounding in `step` never pushes it off 1.0.
    t[n - 1] = 1.0;
    Ok(t)
}
/// Waveform family plus the parameters needed to evaluate it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformGenerator {
    pub kind: WaveformKind,
    pub frequency_hz: f64,
    pub pulse_duty: f64,
}
impl WaveformGenerator {
    pub fn new(kind: WaveformKind, frequency_hz: f64) -> Result<Self, SignalError> {
        Self::with_duty(kind, frequency_hz, PULSE_DEFAULT_DUTY)
    }
    pub fn with_duty(
        kind: WaveformKind,
        frequency_hz: f64,
        pulse_duty: f64,
    ) -> Result<Self, SignalError> {
        if !frequency_hz.is_finite() {
            return Err(SignalError::invalid(format!(
                "signal frequency must be finite, got {frequency_hz}"
            )));
        }
        if !(pulse_duty > 0.0 && pulse_duty < 1.0) {
            return Err(SignalError::invalid(format!(
                "pulse duty cycle must lie in (0, 1), got {pulse_duty}"
            )));
        }
        Ok(Self {
            kind,
            frequency_hz,
            pulse_duty,
        })
    }
    /// Evaluate the clean signal at a single instant.
    ///
    /// `Square` maps `sin == 0` to `+1`, so every square sample is exactly `±1`.
    pub fn sample(&self, t: f64) -> f64 {
        let f = self.frequency_hz;
        let cycles = t * f;
        match self.kind {
            WaveformKind::Sine => (TAU * cycles).sin(),
            WaveformKind::Cos => (TAU * cycles).cos(),
            WaveformKind::Square => {
                if (TAU * cycles).sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            WaveformKind::Triangle => 2.0 * (2.0 * (cycles - (cycles + 0.5).floor())).abs() - 1.0,
            WaveformKind::Sawtooth => 2.0 * (cycles - (0.5 + cycles).floor()),
            WaveformKind::Pulse => {
                if cycles.rem_euclid(1.0) < self.pulse_duty {
                    1.0
                } else {
                    -1.0
                }
            }
            WaveformKind::Chirp => {
                let sweep = (CHIRP_END_HZ - CHIRP_START_HZ) / 2.0;
                (TAU * (CHIRP_START_HZ * t + sweep * t * t)).sin()
            }
        }
    }
    pub fn generate(&self, t: &[f64]) -> Vec<f64> {
        t.iter().map(|&ti| self.sample(ti)).collect()
    }
}
/// Generate a clean signal with the default pulse duty cycle.
pub fn generate(t: &[f64], freq: f64, kind: WaveformKind) -> Result<Vec<f64>, SignalError> {
    Ok(WaveformGenerator::new(kind, freq)?.generate(t))
}
