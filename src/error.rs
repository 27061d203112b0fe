// error.rs - Structured error types for compilation and matching.
//
// Every native failure path maps to one of three variants, preserving the
// original engine status code for interop. No-match is not an error and
// never appears here; it is a normal MatchResult outcome.

use std::fmt;

use crate::ffi;

/// Error type for pattern compilation and match execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The engine rejected the pattern at compile time.
    ///
    /// `message` is the engine's own diagnostic text; `offset` is the byte
    /// position in the pattern where the error was detected, when reported.
    Compile {
        code: i32,
        message: String,
        offset: Option<usize>,
    },
    /// The native execute call returned an unexpected negative status
    /// (anything other than the no-match sentinel).
    Exec { code: i32, message: String },
    /// The engine broke one of this binding's invariants: a corrupt capture
    /// count, an ovector smaller than the sizing rule permits, or a failed
    /// scratch allocation. This indicates a binding/engine mismatch, not a
    /// user error.
    Internal { message: String },
}

impl Error {
    pub(crate) fn compile(code: i32, offset: usize) -> Error {
        Error::Compile {
            code,
            message: ffi::error_message(code),
            offset: Some(offset),
        }
    }

    pub(crate) fn exec(code: i32) -> Error {
        Error::Exec {
            code,
            message: ffi::error_message(code),
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Error {
        Error::Internal {
            message: message.into(),
        }
    }

    /// The original engine status code, if this error carries one.
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::Compile { code, .. } | Error::Exec { code, .. } => Some(*code),
            Error::Internal { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compile {
                message,
                offset: Some(offset),
                ..
            } => write!(f, "pattern error at offset {}: {}", offset, message),
            Error::Compile { message, .. } => write!(f, "pattern error: {}", message),
            Error::Exec { code, message } => {
                write!(f, "match failed: {} (code {})", message, code)
            }
            Error::Internal { message } => write!(f, "binding inconsistency: {}", message),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_display_includes_offset() {
        let err = Error::Compile {
            code: 14,
            message: "missing closing parenthesis".to_string(),
            offset: Some(9),
        };
        assert_eq!(
            err.to_string(),
            "pattern error at offset 9: missing closing parenthesis"
        );
        assert_eq!(err.code(), Some(14));
    }

    #[test]
    fn compile_error_display_without_offset() {
        let err = Error::Compile {
            code: 14,
            message: "missing closing parenthesis".to_string(),
            offset: None,
        };
        assert_eq!(err.to_string(), "pattern error: missing closing parenthesis");
    }

    #[test]
    fn exec_error_carries_engine_text() {
        // -2 is the engine's "partial match" status; any non-sentinel
        // negative would do.
        let err = Error::exec(-2);
        assert_eq!(err.code(), Some(-2));
        match &err {
            Error::Exec { message, .. } => assert!(!message.is_empty()),
            other => panic!("expected Exec, got {:?}", other),
        }
        assert!(err.to_string().starts_with("match failed:"));
    }

    #[test]
    fn internal_error_has_no_code() {
        let err = Error::internal("ovector smaller than the sizing rule permits");
        assert_eq!(err.code(), None);
        assert!(err.to_string().starts_with("binding inconsistency:"));
    }

    #[test]
    fn error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(Error::internal("x"));
        assert_eq!(err.to_string(), "binding inconsistency: x");
    }
}
