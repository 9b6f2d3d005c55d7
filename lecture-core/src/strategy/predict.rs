//! Prediction strategies for a series of observed values.

use thiserror::Error;

/// Error type for predictions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("cannot predict from an empty series")]
    EmptyInput,
}

/// Predicts the next value of a series.
pub trait PredictionStrategy {
    fn predict(&self, values: &[f64]) -> Result<f64, PredictError>;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> PredictionStrategy for F
where
    F: Fn(&[f64]) -> Result<f64, PredictError>,
{
    fn predict(&self, values: &[f64]) -> Result<f64, PredictError> {
        self(values)
    }
}

/// Predicts that the last observation repeats.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastValue;

impl PredictionStrategy for LastValue {
    fn predict(&self, values: &[f64]) -> Result<f64, PredictError> {
        last_value(values)
    }

    fn name(&self) -> &str {
        "last-value"
    }
}

/// Predicts the mean of all observations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanValue;

impl PredictionStrategy for MeanValue {
    fn predict(&self, values: &[f64]) -> Result<f64, PredictError> {
        mean(values)
    }

    fn name(&self) -> &str {
        "mean-value"
    }
}

/// Last element of `values`, or `0.0` when there is none.
pub fn last_value(values: &[f64]) -> Result<f64, PredictError> {
    Ok(values.last().copied().unwrap_or(0.0))
}

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> Result<f64, PredictError> {
    if values.is_empty() {
        return Err(PredictError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
