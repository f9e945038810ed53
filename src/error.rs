use thiserror::Error;

pub type PortalResult<T> = Result<T, PortalError>;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid loan terms: {0}")]
    InvalidLoanTerms(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
