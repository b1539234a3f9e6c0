use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors that can occur while invoking a Shodan tool
///
/// These never cross the tool boundary as errors: the client folds every
/// variant into [`CallResult::Failure`](crate::CallResult::Failure).
#[derive(Error, Debug)]
pub enum ToolError {
    /// A required parameter was not supplied and has no default
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    /// An argument could not be rendered into the request
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// No tool with this name exists in the catalog
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The API answered with a non-2xx status
    #[error("API error ({status}): {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Serialized error body returned by the API
        body: String,
    },

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The response body was not valid JSON
    #[error("JSON error: {0}")]
    Decode(String),

    /// The base URL and path did not form a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The client could not be configured
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`ToolError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Bad arguments or an unknown tool; nothing was sent
    Input,
    /// Non-2xx response
    Remote,
    /// Network or connection fault
    Transport,
    /// Undecodable response body
    Decode,
}

impl ToolError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::MissingParameter(_)
            | Self::InvalidArgument { .. }
            | Self::UnknownTool(_)
            | Self::InvalidUrl(_)
            | Self::Config(_) => FailureKind::Input,
            Self::Remote { .. } => FailureKind::Remote,
            Self::Transport(_) => FailureKind::Transport,
            Self::Decode(_) => FailureKind::Decode,
        }
    }

    /// Returns the HTTP status code if the API rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the API rejected the key (401/403)
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Remote { status: 401 | 403, .. })
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
