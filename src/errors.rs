use thiserror::Error;

pub type ObrolanResult<T> = Result<T, ObrolanError>;

#[derive(Debug, Error)]
pub enum ObrolanError {
    #[error("api error: {0}")]
    Api(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ObrolanError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        ObrolanError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        ObrolanError::Config(msg.into())
    }
}
