use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("INVALID_REQUEST: {0}")]
    InvalidRequest(String),
    #[error("DATA_ACCESS: {0}")]
    DataAccess(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(value: rusqlite::Error) -> Self {
        Self::DataAccess(value.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::DataAccess(value.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::DataAccess(value.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(value: zip::result::ZipError) -> Self {
        Self::DataAccess(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
