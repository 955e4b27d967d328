use thiserror::Error;

/// Rejected [`SphereConfig`](crate::config::SphereConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("opacity range {min}..={max} must lie within 0..=1 with min <= max")]
    OpacityRange { min: f64, max: f64 },
}
