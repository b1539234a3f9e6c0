use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// Outcome of one tool invocation
///
/// A tool never fails with an `Err`: transport faults, API rejections and
/// undecodable bodies all arrive as [`CallResult::Failure`].
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    /// The decoded JSON body, untouched
    Success(Value),
    /// Human-readable failure description
    Failure(String),
}

impl CallResult {
    /// Build a failure from anything printable
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Returns true for [`CallResult::Success`]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for [`CallResult::Failure`]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The payload, if the call succeeded
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// The failure message, if the call failed
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(m) => Some(m),
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<Value, String> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Failure(m) => Err(m),
        }
    }

    /// The shape handed back to the agent: the payload on success,
    /// `{"error": message}` on failure
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Success(v) => v,
            Self::Failure(m) => json!({ "error": m }),
        }
    }
}

impl From<CallResult> for Value {
    fn from(result: CallResult) -> Self {
        result.into_value()
    }
}

impl Serialize for CallResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(v) => v.serialize(serializer),
            Self::Failure(m) => json!({ "error": m }).serialize(serializer),
        }
    }
}
