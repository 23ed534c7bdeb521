use std::io;

#[derive(thiserror::Error, Debug)]
pub enum ShieldError {
    #[error("malformed url: {0}")]
    MalformedUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout")]
    Timeout,
    #[error("http error: {0}")]
    Http(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("db error: {0}")]
    Db(String),
    #[error("unknown error")]
    Unknown,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for ShieldError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ShieldError::Timeout
        } else if err.is_connect() {
            ShieldError::Network(err.to_string())
        } else if err.is_status() {
            ShieldError::Http(err.to_string())
        } else {
            ShieldError::Unknown
        }
    }
}

impl From<rusqlite::Error> for ShieldError {
    fn from(err: rusqlite::Error) -> Self {
        ShieldError::Db(err.to_string())
    }
}
