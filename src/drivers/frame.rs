use crate::drivers::SignalError;
/// Labelled traces sharing one time axis, ready for plotting.
#[derive(Clone, Debug, Default)]
pub struct TraceFrame {
    pub time: Vec<f64>,
    pub labels: Vec<String>,
    pub series: Vec<Vec<f64>>, // trace x samples
}
impl TraceFrame {
    pub fn new(time: Vec<f64>) -> Self {
        Self {
            time,
            labels: Vec::new(),
            series: Vec::new(),
        }
    }
    pub fn push(&mut self, label: impl Into<String>, values: Vec<f64>) -> Result<(), SignalError> {
        let label = label.into();
        if values.len() != self.time.len() {
            return Err(SignalError::invalid(format!(
                "trace '{label}' has {} samples, time axis has {}",
                values.len(),
                self.time.len()
            )));
        }
        self.labels.push(label);
        self.series.push(values);
        Ok(())
    }
    pub fn with_trace(
        mut self,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, SignalError> {
        self.push(label, values)?;
        Ok(self)
    }
    pub fn num_traces(&self) -> usize {
        self.series.len()
    }
    pub fn duration(&self) -> f64 {
        match (self.time.first(), self.time.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
    /// Samples per unit of time along the axis.
    pub fn sample_rate(&self) -> Option<f64> {
        let duration = self.duration();
        (self.time.len() >= 2 && duration > 0.0).then(|| (self.time.len() - 1) as f64 / duration)
    }
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut values = self.series.iter().flat_map(|s| s.iter().copied());
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
