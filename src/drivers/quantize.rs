use crate::drivers::SignalError;
/// Smallest value representable in the 12-bit signed register.
pub const SAMPLE_MIN: i32 = -2048;
/// Largest value representable in the 12-bit signed register.
pub const SAMPLE_MAX: i32 = 2047;
/// Default float-to-count scale. Leaves ~2.4% headroom above a unit-amplitude
/// signal before the clamp engages; a tuning choice, not a hardware limit.
pub const DEFAULT_SCALE: i32 = 2000;
/// Truncate toward zero into the 16-bit intermediate the hardware model uses.
///
/// Values beyond the i16 range saturate and NaN maps to zero, so the later
/// 12-bit clamp always sees the correct sign.
pub fn truncate_toward_zero(value: f64) -> i16 {
    value.trunc() as i16
}
/// Hard saturating clamp into [`SAMPLE_MIN`, `SAMPLE_MAX`].
pub fn clip12(value: i32) -> i32 {
    value.clamp(SAMPLE_MIN, SAMPLE_MAX)
}
/// Scale-then-truncate-then-clip quantizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantizer {
    scale: i32,
}
impl Default for Quantizer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}
impl Quantizer {
    pub fn with_scale(scale: i32) -> Result<Self, SignalError> {
        if scale <= 0 {
            return Err(SignalError::invalid(format!(
                "quantizer scale must be positive, got {scale}"
            )));
        }
        Ok(Self { scale })
    }
    pub fn scale(&self) -> i32 {
        self.scale
    }
    pub fn quantize_sample(&self, value: f64) -> i32 {
        clip12(i32::from(truncate_toward_zero(value * f64::from(self.scale))))
    }
    pub fn quantize(&self, noisy: &[f64]) -> Vec<i32> {
        noisy.iter().map(|&v| self.quantize_sample(v)).collect()
    }
}
pub fn quantize(noisy: &[f64], scale: i32) -> Result<Vec<i32>, SignalError> {
    Ok(Quantizer::with_scale(scale)?.quantize(noisy))
}
