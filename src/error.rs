// ABOUTME: Error types and gRPC status translation for the ACP client
// ABOUTME: Maps transport status codes onto a stable, language-neutral error taxonomy

//! Error types and utilities for the ACP client.
//!
//! All fallible operations in this crate return [`Result`]. Transport errors
//! are translated at the boundary of every RPC into one of the stable error
//! kinds below; the original [`tonic::Status`] is preserved as the error
//! source. Local guard failures (type mismatches, unstored link targets,
//! version-gate misses, ...) use the same taxonomy but carry no transport
//! cause.

use thiserror::Error;
use tonic::{Code, Status};

/// Result type alias for ACP client operations
pub type Result<T> = std::result::Result<T, AcpError>;

/// Error type for all ACP client operations
#[derive(Debug, Error)]
pub enum AcpError {
    /// A request argument or local input was rejected
    #[error("{message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<Status>,
    },

    /// The addressed resource does not exist (anymore)
    #[error("{message}")]
    NotFound {
        message: String,
        #[source]
        source: Option<Status>,
    },

    /// The operation failed on the server or violated a client-side invariant
    #[error("{message}")]
    Runtime {
        message: String,
        #[source]
        source: Option<Status>,
    },

    /// The call did not complete within the transport deadline
    #[error("{message}")]
    Timeout {
        message: String,
        #[source]
        source: Option<Status>,
    },

    /// The caller is not allowed to perform the operation
    #[error("{message}")]
    PermissionDenied {
        message: String,
        #[source]
        source: Option<Status>,
    },

    /// The server does not implement the requested operation
    #[error("{message}")]
    NotImplemented {
        message: String,
        #[source]
        source: Option<Status>,
    },

    /// The server cannot be reached
    #[error("{message}")]
    Unavailable {
        message: String,
        #[source]
        source: Option<Status>,
    },
}

/// Discriminant-only view of [`AcpError`], used to assert on error kinds
/// without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Runtime,
    Timeout,
    PermissionDenied,
    NotImplemented,
    Unavailable,
}

impl AcpError {
    /// Create a new invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new runtime error
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new permission-denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new not-implemented error
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable {
            message: msg.into(),
            source: None,
        }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Runtime { .. } => ErrorKind::Runtime,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::NotImplemented { .. } => ErrorKind::NotImplemented,
            Self::Unavailable { .. } => ErrorKind::Unavailable,
        }
    }

    /// The error message
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. }
            | Self::NotFound { message, .. }
            | Self::Runtime { message, .. }
            | Self::Timeout { message, .. }
            | Self::PermissionDenied { message, .. }
            | Self::NotImplemented { message, .. }
            | Self::Unavailable { message, .. } => message,
        }
    }
}

/// The canonical UPPER_SNAKE_CASE name of a gRPC status code, as it appears
/// in translated error messages.
pub(crate) fn status_code_name(code: Code) -> &'static str {
    match code {
        Code::Ok => "OK",
        Code::Cancelled => "CANCELLED",
        Code::Unknown => "UNKNOWN",
        Code::InvalidArgument => "INVALID_ARGUMENT",
        Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
        Code::NotFound => "NOT_FOUND",
        Code::AlreadyExists => "ALREADY_EXISTS",
        Code::PermissionDenied => "PERMISSION_DENIED",
        Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
        Code::FailedPrecondition => "FAILED_PRECONDITION",
        Code::Aborted => "ABORTED",
        Code::OutOfRange => "OUT_OF_RANGE",
        Code::Unimplemented => "UNIMPLEMENTED",
        Code::Internal => "INTERNAL",
        Code::Unavailable => "UNAVAILABLE",
        Code::DataLoss => "DATA_LOSS",
        Code::Unauthenticated => "UNAUTHENTICATED",
    }
}

impl From<Status> for AcpError {
    /// Translate a gRPC status into an [`AcpError`].
    ///
    /// The message is the first line of the server details followed by the
    /// status code name, e.g. `"no such object (RPC status code NOT_FOUND)"`.
    /// The original status is kept as the error source.
    fn from(status: Status) -> Self {
        let details = status
            .message()
            .split('\n')
            .next()
            .unwrap_or_default()
            .trim()
            .to_owned();
        let message = format!(
            "{} (RPC status code {})",
            details,
            status_code_name(status.code())
        );
        let source = Some(status.clone());
        match status.code() {
            Code::InvalidArgument => Self::InvalidArgument { message, source },
            Code::NotFound | Code::OutOfRange => Self::NotFound { message, source },
            Code::DeadlineExceeded => Self::Timeout { message, source },
            Code::PermissionDenied | Code::Unauthenticated => {
                Self::PermissionDenied { message, source }
            }
            Code::Unimplemented => Self::NotImplemented { message, source },
            Code::Unavailable => Self::Unavailable { message, source },
            // ALREADY_EXISTS, FAILED_PRECONDITION, ABORTED, DATA_LOSS,
            // INTERNAL, UNKNOWN and everything else map to a runtime error.
            _ => Self::Runtime { message, source },
        }
    }
}
