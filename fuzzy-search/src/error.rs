use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuzzySearchError {
    #[error("cull_factor must be in [0.0, 1.0], got {0}")]
    CullFactorOutOfRange(f64),

    #[error("cull_cutoff must be finite, got {0}")]
    NonFiniteCutoff(f64),

    #[error("Invalid search config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FuzzySearchError>;
