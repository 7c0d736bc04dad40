use std::error::Error as StdError;
use thiserror::Error;

/// Why a single status probe failed to produce a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("{0}")]
    Request(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        // A connect timeout is both a timeout and a connect error; timeout wins.
        if err.is_timeout() {
            ProbeError::Timeout
        } else if err.is_redirect() {
            ProbeError::TooManyRedirects
        } else if err.is_connect() {
            ProbeError::Connection(error_chain(&err))
        } else {
            ProbeError::Request(error_chain(&err))
        }
    }
}

impl From<url::ParseError> for ProbeError {
    fn from(err: url::ParseError) -> Self {
        ProbeError::Request(format!("invalid URL: {}", err))
    }
}

/// Render an error followed by its sources, joined with ": ".
fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
