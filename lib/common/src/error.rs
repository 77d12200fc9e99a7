use thiserror::Error;
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeSliderError {
    #[error("Invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: f32, max: f32 },

    #[error("Bounds must be finite, got {min}..={max}")]
    NonFiniteBounds { min: f32, max: f32 },

    #[error("Divisions must be a positive integer")]
    ZeroDivisions,
}
