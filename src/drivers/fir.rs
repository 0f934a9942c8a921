use crate::drivers::quantize::{clip12, truncate_toward_zero};
use crate::drivers::SignalError;
/// Raw integer weights of the default 6-tap low-pass kernel (sum 98).
pub const DEFAULT_LOWPASS_WEIGHTS: [u32; 6] = [2, 14, 7, 28, 15, 32];
/// FIR kernel whose taps always sum to 1.0, so DC level passes unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct FirKernel {
    taps: Vec<f64>,
}
impl Default for FirKernel {
    fn default() -> Self {
        let sum: u32 = DEFAULT_LOWPASS_WEIGHTS.iter().sum();
        Self {
            taps: DEFAULT_LOWPASS_WEIGHTS
                .iter()
                .map(|&w| f64::from(w) / f64::from(sum))
                .collect(),
        }
    }
}
impl FirKernel {
    /// Normalize non-negative weights by their sum.
    pub fn from_weights(weights: &[f64]) -> Result<Self, SignalError> {
        if weights.is_empty() {
            return Err(SignalError::invalid("FIR kernel needs at least one tap"));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SignalError::invalid(
                "FIR kernel weights must be finite and non-negative",
            ));
        }
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return Err(SignalError::invalid("FIR kernel weights sum to zero"));
        }
        Ok(Self {
            taps: weights.iter().map(|w| w / sum).collect(),
        })
    }
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }
    pub fn len(&self) -> usize {
        self.taps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
    /// Same-length convolution centred on each output index.
    ///
    /// `out[i] = sum_k x[i + c - k] * h[k]` with `c = (len - 1) / 2`; input
    /// positions outside the signal read as zero.
    pub fn convolve_same(&self, signal: &[i32]) -> Vec<f64> {
        let n = signal.len() as isize;
        let centre = ((self.taps.len() - 1) / 2) as isize;
        (0..n)
            .map(|i| {
                self.taps
                    .iter()
                    .enumerate()
                    .filter_map(|(k, &h)| {
                        let idx = i + centre - k as isize;
                        (0..n)
                            .contains(&idx)
                            .then(|| f64::from(signal[idx as usize]) * h)
                    })
                    .sum::<f64>()
            })
            .collect()
    }
}
pub fn filter(signal: &[i32], kernel: &FirKernel) -> Vec<f64> {
    kernel.convolve_same(signal)
}
/// Truncate filtered values toward zero and re-clip to the 12-bit range.
///
/// A unit-sum non-negative kernel cannot leave the input range, so the clip
/// never fires for signals produced by the quantizer.
pub fn to_samples(filtered: &[f64]) -> Vec<i32> {
    filtered
        .iter()
        .map(|&v| clip12(i32::from(truncate_toward_zero(v))))
        .collect()
}
