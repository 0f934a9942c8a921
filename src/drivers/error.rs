use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("sample {value} is outside the 12-bit signed range [-2048, 2047]")]
    OutOfRange { value: i64 },
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl SignalError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SignalError::InvalidArgument(message.into())
    }
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SignalError::Io {
            path: path.into(),
            source,
        }
    }
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for SignalError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        SignalError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for SignalError {
    fn from(value: image::ImageError) -> Self {
        SignalError::Plot(value.to_string())
    }
}
