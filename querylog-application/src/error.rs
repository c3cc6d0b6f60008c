#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid header name: name={name}, reason={reason}")]
    InvalidHeaderName { name: String, reason: String },

    #[error("config: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
