use std::error::Error;
use std::fmt;

/// Error raised while resolving an intrinsic descriptor.
///
/// Only two classes exist: malformed descriptors (and unknown base names)
/// are syntax errors, everything else - bad arguments, intrinsics known but
/// unavailable in the current realm - is a type error. No error is retried
/// or absorbed internally; every violation surfaces to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum IntrinsicError {
    SyntaxError(String),
    TypeError(String),
}

impl IntrinsicError {
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, IntrinsicError::SyntaxError(_))
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, IntrinsicError::TypeError(_))
    }

    /// The bare message, without the error-class prefix.
    pub fn message(&self) -> &str {
        match self {
            IntrinsicError::SyntaxError(m) => m,
            IntrinsicError::TypeError(m) => m,
        }
    }
}

impl fmt::Display for IntrinsicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntrinsicError::SyntaxError(m) => write!(f, "Syntax error: {}", m),
            IntrinsicError::TypeError(m) => write!(f, "Type error: {}", m),
        }
    }
}

impl Error for IntrinsicError {}
