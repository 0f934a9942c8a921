use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use crate::drivers::SignalError;
/// Additive white Gaussian noise source.
///
/// Seeded injectors draw from ChaCha8, whose output stream is fixed across
/// platforms and releases, so a given seed always yields the same noise.
pub struct NoiseInjector {
    sigma: f64,
    rng: ChaCha8Rng,
}
impl NoiseInjector {
    pub fn new(sigma: f64, seed: Option<u64>) -> Result<Self, SignalError> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(SignalError::invalid(format!(
                "noise amplitude must be a finite value >= 0, got {sigma}"
            )));
        }
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self { sigma, rng })
    }
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
    /// Add one independent N(0, sigma) draw to every sample.
    pub fn apply(&mut self, clean: &[f64]) -> Result<Vec<f64>, SignalError> {
        if self.sigma == 0.0 {
            return Ok(clean.to_vec());
        }
        let dist = Normal::new(0.0, self.sigma)
            .map_err(|e| SignalError::invalid(format!("noise distribution: {e}")))?;
        Ok(clean
            .iter()
            .map(|&v| v + dist.sample(&mut self.rng))
            .collect())
    }
}
pub fn add_noise(clean: &[f64], sigma: f64, seed: Option<u64>) -> Result<Vec<f64>, SignalError> {
    NoiseInjector::new(sigma, seed)?.apply(clean)
}
