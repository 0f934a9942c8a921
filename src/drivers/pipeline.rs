use std::path::Path;
use log::{debug, info};
use crate::drivers::error::SignalError;
use crate::drivers::fir::{self, FirKernel};
use crate::drivers::hex;
use crate::drivers::noise::NoiseInjector;
use crate::drivers::quantize::{Quantizer, SAMPLE_MAX, SAMPLE_MIN};
use crate::drivers::waveform::{time_base, WaveformGenerator};
use crate::drivers::TraceFrame;
/// Filter output kept both as real values and as persisted integer samples.
#[derive(Clone, Debug)]
pub struct FilteredSignal {
    pub values: Vec<f64>,
    pub samples: Vec<i32>,
}
/// Every intermediate sequence of one generation run.
#[derive(Clone, Debug)]
pub struct GeneratedSignal {
    pub time: Vec<f64>,
    pub clean: Vec<f64>,
    pub noisy: Vec<f64>,
    pub quantized: Vec<i32>,
    pub filtered: Option<FilteredSignal>,
    pub scale: i32,
}
impl GeneratedSignal {
    pub fn len(&self) -> usize {
        self.time.len()
    }
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
    /// Clean trace plus the quantized (and filtered) samples rescaled back to
    /// signal units.
    pub fn trace_frame(&self) -> Result<TraceFrame, SignalError> {
        let scale = f64::from(self.scale);
        let mut frame = TraceFrame::new(self.time.clone())
            .with_trace("clean", self.clean.clone())?
            .with_trace(
                "quantized",
                self.quantized.iter().map(|&q| f64::from(q) / scale).collect(),
            )?;
        if let Some(filtered) = &self.filtered {
            frame.push(
                "filtered",
                filtered.samples.iter().map(|&q| f64::from(q) / scale).collect(),
            )?;
        }
        Ok(frame)
    }
    /// Integer-domain traces, the input to spectrum estimation.
    pub fn sample_frame(&self) -> Result<TraceFrame, SignalError> {
        let mut frame = TraceFrame::new(self.time.clone()).with_trace(
            "quantized",
            self.quantized.iter().map(|&q| f64::from(q)).collect(),
        )?;
        if let Some(filtered) = &self.filtered {
            frame.push("filtered", filtered.values.clone())?;
        }
        Ok(frame)
    }
    /// Persist the quantized dump and, when present and requested, the filtered dump.
    pub fn write_outputs(
        &self,
        quantized_path: &Path,
        filtered_path: Option<&Path>,
    ) -> Result<(), SignalError> {
        hex::write_hex_file(quantized_path, &self.quantized)?;
        if let (Some(filtered), Some(path)) = (&self.filtered, filtered_path) {
            hex::write_hex_file(path, &filtered.samples)?;
        }
        Ok(())
    }
}
/// Waveform -> noise -> quantizer -> optional FIR, run start to finish.
pub struct SignalPipeline {
    generator: WaveformGenerator,
    noise: NoiseInjector,
    quantizer: Quantizer,
    filter: Option<FirKernel>,
}
impl SignalPipeline {
    pub fn new(
        generator: WaveformGenerator,
        noise: NoiseInjector,
        quantizer: Quantizer,
        filter: Option<FirKernel>,
    ) -> Self {
        Self {
            generator,
            noise,
            quantizer,
            filter,
        }
    }
    pub fn run(&mut self, sample_count: usize) -> Result<GeneratedSignal, SignalError> {
        let time = time_base(sample_count)?;
        let clean = self.generator.generate(&time);
        debug!(
            "generated {} {} samples at {} cycles/unit",
            clean.len(),
            self.generator.kind,
            self.generator.frequency_hz
        );
        let noisy = self.noise.apply(&clean)?;
        let quantized = self.quantizer.quantize(&noisy);
        let clipped = quantized
            .iter()
            .filter(|&&q| q == SAMPLE_MAX || q == SAMPLE_MIN)
            .count();
        if clipped > 0 {
            info!("{clipped} of {} samples saturated at the 12-bit limits", quantized.len());
        }
        let filtered = self.filter.as_ref().map(|kernel| {
            let values = fir::filter(&quantized, kernel);
            let samples = fir::to_samples(&values);
            FilteredSignal { values, samples }
        });
        Ok(GeneratedSignal {
            time,
            clean,
            noisy,
            quantized,
            filtered,
            scale: self.quantizer.scale(),
        })
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::waveform::WaveformKind;
    fn sine_pipeline(sigma: f64, seed: Option<u64>, filter: bool) -> SignalPipeline {
        SignalPipeline::new(
            WaveformGenerator::new(WaveformKind::Sine, 5.0).unwrap(),
            NoiseInjector::new(sigma, seed).unwrap(),
            Quantizer::default(),
            filter.then(FirKernel::default),
        )
    }
    #[test]
    fn noiseless_sine_is_repeatable_and_hits_reference_points() {
        let a = sine_pipeline(0.0, None, false).run(1000).unwrap();
        let b = sine_pipeline(0.0, None, false).run(1000).unwrap();
        assert_eq!(a.quantized, b.quantized);
        assert_eq!(a.quantized[0], 0);
        assert_eq!(hex::encode(a.quantized[0]).unwrap(), "000");
        // Index nearest t = 0.05, a quarter period in.
        let idx = a
            .time
            .iter()
            .enumerate()
            .min_by(|x, y| (x.1 - 0.05).abs().total_cmp(&(y.1 - 0.05).abs()))
            .map(|(i, _)| i)
            .unwrap();
        assert!((1990..=2000).contains(&a.quantized[idx]), "{}", a.quantized[idx]);
        assert!(a.filtered.is_none());
    }
    #[test]
    fn seeded_runs_match() {
        let a = sine_pipeline(0.2, Some(9), true).run(500).unwrap();
        let b = sine_pipeline(0.2, Some(9), true).run(500).unwrap();
        assert_eq!(a.quantized, b.quantized);
        assert_eq!(
            a.filtered.as_ref().unwrap().samples,
            b.filtered.as_ref().unwrap().samples
        );
    }
    #[test]
    fn filtering_reduces_noise_power() {
        let run = sine_pipeline(0.3, Some(3), true).run(1000).unwrap();
        let filtered = run.filtered.as_ref().unwrap();
        assert_eq!(filtered.samples.len(), 1000);
        let scale = f64::from(run.scale);
        let err = |xs: &[f64]| -> f64 {
            xs.iter()
                .zip(&run.clean)
                .skip(10)
                .take(980)
                .map(|(x, c)| (x / scale - c).powi(2))
                .sum::<f64>()
        };
        let raw: Vec<f64> = run.quantized.iter().map(|&q| f64::from(q)).collect();
        let smooth: Vec<f64> = filtered.samples.iter().map(|&q| f64::from(q)).collect();
        assert!(err(&smooth) < err(&raw));
    }
    #[test]
    fn too_few_samples_is_invalid() {
        assert!(matches!(
            sine_pipeline(0.0, None, false).run(1),
            Err(SignalError::InvalidArgument(_))
        ));
    }
    #[test]
    fn writes_both_dumps() {
        let dir = tempfile::tempdir().unwrap();
        let noisy_path = dir.path().join("input_signal.txt");
        let filtered_path = dir.path().join("filtered_signal.txt");
        let run = sine_pipeline(0.1, Some(1), true).run(1000).unwrap();
        run.write_outputs(&noisy_path, Some(filtered_path.as_path())).unwrap();
        let noisy = std::fs::read_to_string(&noisy_path).unwrap();
        assert_eq!(noisy.lines().count(), 1000);
        assert!(noisy.lines().all(|l| l.len() == 3 && l.bytes().all(|b| b.is_ascii_hexdigit())));
        assert_eq!(hex::read_hex_file(&noisy_path).unwrap(), run.quantized);
        assert_eq!(
            hex::read_hex_file(&filtered_path).unwrap(),
            run.filtered.unwrap().samples
        );
    }
    #[test]
    fn frames_carry_expected_traces() {
        let run = sine_pipeline(0.1, Some(1), true).run(64).unwrap();
        let frame = run.trace_frame().unwrap();
        assert_eq!(frame.labels, vec!["clean", "quantized", "filtered"]);
        assert_eq!(run.sample_frame().unwrap().num_traces(), 2);
    }
}
