use thiserror::Error;

pub type SectorResult<T> = Result<T, SectorError>;

#[derive(Debug, Error)]
pub enum SectorError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
