use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Star value out of range 1-9: {0}")]
    StarOutOfRange(u8),

    #[error("Mountain index out of range 0-23: {0}")]
    MountainIndexOutOfRange(usize),

    #[error("Unknown mountain name: {0}")]
    UnknownMountain(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
