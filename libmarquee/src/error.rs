//! Error types for Marquee

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarqueeError>;

#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MarqueeError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MarqueeError::InvalidInput(_) => 3,
            MarqueeError::Fetch(FetchError::Unauthorized { .. }) => 2,
            MarqueeError::Fetch(_) => 1,
            MarqueeError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Failure of a catalog request.
///
/// The status-coded variants cover every non-success the TMDB API returns,
/// each paired with the user-facing message shown in the UI. `Network` and
/// `Decode` cover failures before a status or body could be interpreted.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{status} {}", UNAUTHORIZED_MESSAGE)]
    Unauthorized { status: u16 },

    #[error("{status} {}", FORBIDDEN_MESSAGE)]
    Forbidden { status: u16 },

    #[error("{status} {}", NOT_FOUND_MESSAGE)]
    NotFound { status: u16 },

    #[error("{status} {}", SERVER_ERROR_MESSAGE)]
    ServerError { status: u16 },

    #[error("{status} {}", UNKNOWN_MESSAGE)]
    Unknown { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub const UNAUTHORIZED_MESSAGE: &str = "유효하지 않은 접근입니다.";
pub const FORBIDDEN_MESSAGE: &str = "접근 권한이 없습니다.";
pub const NOT_FOUND_MESSAGE: &str = "컨텐츠를 찾을 수 없습니다.";
pub const SERVER_ERROR_MESSAGE: &str = "서버에서 문제가 발생했습니다.";
pub const UNKNOWN_MESSAGE: &str = "알 수 없는 오류가 발생했습니다.";

impl FetchError {
    /// HTTP status behind this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Unauthorized { status }
            | FetchError::Forbidden { status }
            | FetchError::NotFound { status }
            | FetchError::ServerError { status }
            | FetchError::Unknown { status } => Some(*status),
            FetchError::Network(_) | FetchError::Decode(_) => None,
        }
    }

    /// User-facing message without the status prefix.
    pub fn message(&self) -> String {
        match self {
            FetchError::Unauthorized { .. } => UNAUTHORIZED_MESSAGE.to_string(),
            FetchError::Forbidden { .. } => FORBIDDEN_MESSAGE.to_string(),
            FetchError::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
            FetchError::ServerError { .. } => SERVER_ERROR_MESSAGE.to_string(),
            FetchError::Unknown { .. } => UNKNOWN_MESSAGE.to_string(),
            FetchError::Network(err) => format!("Network error: {}", err),
            FetchError::Decode(err) => format!("Failed to decode response: {}", err),
        }
    }
}
