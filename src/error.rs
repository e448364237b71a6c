//! Error types for quakefeed
//!
//! The pipeline has two terminal failure kinds, [`FetchError`] and
//! [`DecodeError`], carried to callers inside [`LoadError`]. Everything
//! around the pipeline (config, CLI, background tasks) uses the crate-level
//! [`Error`].

use thiserror::Error;

// ============================================================================
// Fetch Errors
// ============================================================================

/// Failure to obtain a response body from the feed
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Could not connect to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid request for '{url}': {message}")]
    InvalidRequest { url: String, message: String },

    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },

    #[error("HTTP request to {url} failed: {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    /// Create a status error
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Classify a reqwest error raised while sending a request
    pub fn from_reqwest(url: impl Into<String>, err: &reqwest::Error, timeout_ms: u64) -> Self {
        let url = url.into();
        if err.is_timeout() {
            Self::Timeout { url, timeout_ms }
        } else if err.is_connect() {
            Self::Connect {
                url,
                message: err.to_string(),
            }
        } else if err.is_builder() {
            Self::InvalidRequest {
                url,
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                url,
                message: err.to_string(),
            }
        }
    }

    /// The HTTP status code, when the server answered at all
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The URL that was requested
    pub fn url(&self) -> &str {
        match self {
            Self::Connect { url, .. }
            | Self::Timeout { url, .. }
            | Self::Status { url, .. }
            | Self::InvalidRequest { url, .. }
            | Self::Body { url, .. }
            | Self::Transport { url, .. } => url,
        }
    }
}

// ============================================================================
// Decode Errors
// ============================================================================

/// Wholesale failure to decode a feed document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Failed to parse JSON: {message}")]
    InvalidJson { message: String },

    #[error("Feed document is not a JSON object")]
    NotAnObject,

    #[error("Feed document has no 'features' field")]
    MissingFeatures,

    #[error("Feed 'features' field is {found}, expected an array")]
    FeaturesNotArray { found: &'static str },
}

impl DecodeError {
    /// Create an invalid JSON error
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }
}

// ============================================================================
// Load Errors
// ============================================================================

/// Terminal failure of one pipeline invocation
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl LoadError {
    /// Whether the invocation failed before any body was obtained
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Whether the body was obtained but could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

// ============================================================================
// Crate Errors
// ============================================================================

/// The main error type for quakefeed
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to encode JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {message}")]
    HttpClient { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Background load failed: {message}")]
    Background { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a background task error
    pub fn background(message: impl Into<String>) -> Self {
        Self::Background {
            message: message.into(),
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Self::Load(LoadError::Fetch(err))
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Load(LoadError::Decode(err))
    }
}

/// Result type alias for quakefeed
pub type Result<T> = std::result::Result<T, Error>;
