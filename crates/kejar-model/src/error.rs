use thiserror::Error;

#[derive(Debug, Error)]
pub enum KejarError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("source file error: {0}")]
    Source(String),
    #[error("report generation error: {0}")]
    Report(String),
}

pub type Result<T> = std::result::Result<T, KejarError>;
