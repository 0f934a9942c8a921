use std::fmt;
use crate::config::GeneratorConfig;
use crate::drivers::{encode, GeneratedSignal};
/// Console summary: run parameters, then the first `preview` samples.
pub struct Summary<'a> {
    pub config: &'a GeneratorConfig,
    pub signal: &'a GeneratedSignal,
    pub preview: usize,
}
impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (config, signal) = (self.config, self.signal);
        writeln!(f, "Signal type:      {}", config.signal_type)?;
        writeln!(f, "Samples:          {}", signal.len())?;
        writeln!(f, "Sample rate:      {} Hz", config.sample_rate)?;
        writeln!(f, "Frequency:        {}", config.signal_frequency)?;
        writeln!(f, "Noise amplitude:  {}", config.noise_amplitude)?;
        writeln!(f, "Scale:            {}", signal.scale)?;
        writeln!(
            f,
            "FIR filter:       {}",
            if signal.filtered.is_some() { "on" } else { "off" }
        )?;
        let shown = self.preview.min(signal.len());
        if shown == 0 {
            return Ok(());
        }
        writeln!(f, "\nFirst {shown} values in decimal and hexadecimal:")?;
        for idx in 0..shown {
            let q = signal.quantized[idx];
            write!(f, "Decimal: {q:5}, Hex: {}", hex_or_marker(q))?;
            if let Some(filtered) = &signal.filtered {
                let v = filtered.samples[idx];
                write!(f, "  | Filtered: {v:5}, Hex: {}", hex_or_marker(v))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
pub fn summary(config: &GeneratorConfig, signal: &GeneratedSignal, preview: usize) -> String {
    Summary {
        config,
        signal,
        preview,
    }
    .to_string()
}
fn hex_or_marker(value: i32) -> String {
    encode(value).unwrap_or_else(|_| "???".to_owned())
}
