use rustfft::{num_complex::Complex64, FftPlanner};
use crate::drivers::{SignalError, TraceFrame};
/// Magnitude spectrum for each trace of a frame.
#[derive(Clone, Debug)]
pub struct FrequencySpectrum {
    pub sample_rate: f64,
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<Vec<f64>>, // trace -> bins
    pub labels: Vec<String>,
}
/// Helper that computes FFTs for a given window size.
pub struct SpectrumBuilder {
    fft_size: usize,
}
impl SpectrumBuilder {
    pub fn with_size(fft_size: usize) -> Self {
        Self { fft_size }
    }
    /// Largest power of two not exceeding the frame length.
    pub fn for_frame(frame: &TraceFrame) -> Self {
        let len = frame.time.len().max(2);
        Self::with_size(1 << (usize::BITS - 1 - len.leading_zeros()))
    }
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
    pub fn compute(&self, frame: &TraceFrame) -> Result<FrequencySpectrum, SignalError> {
        if self.fft_size < 2 {
            return Err(SignalError::invalid("fft size must be at least 2"));
        }
        let sample_rate = frame
            .sample_rate()
            .ok_or_else(|| SignalError::invalid("frame needs at least two time points"))?;
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(self.fft_size);
        let frequencies = (0..self.fft_size / 2)
            .map(|k| k as f64 * (sample_rate / self.fft_size as f64))
            .collect();
        let magnitudes = frame
            .series
            .iter()
            .map(|trace| {
                let mut buffer: Vec<Complex64> = trace
                    .iter()
                    .copied()
                    .take(self.fft_size)
                    .map(|v| Complex64::new(v, 0.0))
                    .collect();
                buffer.resize(self.fft_size, Complex64::new(0.0, 0.0));
                fft.process(&mut buffer);
                buffer
                    .iter()
                    .take(self.fft_size / 2)
                    .map(|c| c.norm() / self.fft_size as f64)
                    .collect()
            })
            .collect();
        Ok(FrequencySpectrum {
            sample_rate,
            frequencies,
            magnitudes,
            labels: frame.labels.clone(),
        })
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::waveform::{generate, time_base, WaveformKind};
    #[test]
    fn sine_peaks_at_its_frequency() {
        // 1025 points over [0, 1] give exactly 1024 samples per unit time.
        let t = time_base(1025).unwrap();
        let clean = generate(&t, 32.0, WaveformKind::Sine).unwrap();
        let frame = TraceFrame::new(t).with_trace("clean", clean).unwrap();
        let builder = SpectrumBuilder::for_frame(&frame);
        assert_eq!(builder.fft_size(), 1024);
        let spectrum = builder.compute(&frame).unwrap();
        assert_eq!(spectrum.frequencies.len(), 512);
        let peak = spectrum.magnitudes[0]
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| idx)
            .unwrap();
        assert!((spectrum.frequencies[peak] - 32.0).abs() < 1e-9);
    }
}
