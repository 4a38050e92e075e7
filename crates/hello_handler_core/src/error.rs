use std::fmt;

/// Failures an invocation can report back to the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The event does not expose an attribute the handler reads.
    MissingAttribute { attribute: String },
    ResponseSerialization { message: String },
}

impl HandlerError {
    pub fn missing_attribute(attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
        }
    }

    pub fn response_serialization(message: impl Into<String>) -> Self {
        Self::ResponseSerialization {
            message: message.into(),
        }
    }

    /// Name of the missing attribute, if that is what failed.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::MissingAttribute { attribute } => Some(attribute),
            _ => None,
        }
    }

    /// Stable error class, logged with every failed invocation.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::MissingAttribute { .. } => "AttributeNotFound",
            Self::ResponseSerialization { .. } => "ResponseSerialization",
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute { attribute } => {
                write!(f, "event has no attribute '{attribute}'")
            }
            Self::ResponseSerialization { message } => {
                write!(f, "failed to serialize response: {message}")
            }
        }
    }
}

impl std::error::Error for HandlerError {}
