use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid domain: min={min}, max={max}")]
    InvalidDomain { min: f64, max: f64 },

    #[error(
        "position override returned {position}; valid positions are finite numbers between 0 and 100"
    )]
    InvalidOverride { position: f64 },

    #[error("handle index {index} is out of bounds for {len} handles")]
    InvalidHandle { index: usize, len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
