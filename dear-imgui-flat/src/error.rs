//! Error types for the flat adapter
//!
//! At the C boundary every error is logged and then collapsed into the
//! operation's failure value (`0` or a null pointer). The safe Rust wrapper
//! returns them as [`FlatResult`].

use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::error;

use crate::style::{StyleVar, StyleVarKind};

/// Result type for adapter operations
pub type FlatResult<T> = Result<T, FlatError>;

/// Errors raised while converting or forwarding a call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlatError {
    /// A pointer the core library requires was null
    #[error("{operation}: `{argument}` must not be null")]
    NullArgument {
        operation: &'static str,
        argument: &'static str,
    },

    /// An integer did not name a member of a checked enumeration
    #[error("{operation}: {value} is not a valid {kind}")]
    InvalidEnum {
        operation: &'static str,
        kind: &'static str,
        value: i32,
    },

    /// A style variable was pushed with the wrong number of components
    #[error("{operation}: {var:?} takes a {expected:?} value")]
    StyleVarArity {
        operation: &'static str,
        var: StyleVar,
        expected: StyleVarKind,
    },

    /// Context creation failed
    #[error("Failed to create Dear ImGui context: {reason}")]
    ContextCreation { reason: String },

    /// A context is already current on this thread
    #[error("Cannot create a new ImGui while another context is active")]
    ContextAlreadyActive,

    /// A platform or renderer backend refused to initialize
    #[error("{backend} backend initialization failed: {reason}")]
    BackendInit {
        backend: &'static str,
        reason: String,
    },

    /// The crate was built without the requested backend
    #[error("{backend} backend is not compiled in (enable the `glfw-opengl3` feature)")]
    BackendUnavailable { backend: &'static str },

    /// The GLSL version string contained a NUL byte
    #[error("Invalid GLSL version string")]
    InvalidGlslVersion,
}

impl FlatError {
    /// Create a null-argument error
    pub fn null_argument(operation: &'static str, argument: &'static str) -> Self {
        Self::NullArgument {
            operation,
            argument,
        }
    }

    /// Create an invalid-enum error
    pub fn invalid_enum(operation: &'static str, kind: &'static str, value: i32) -> Self {
        Self::InvalidEnum {
            operation,
            kind,
            value,
        }
    }

    /// Create a context creation error
    pub fn context_creation(reason: impl Into<String>) -> Self {
        Self::ContextCreation {
            reason: reason.into(),
        }
    }

    /// Create a backend initialization error
    pub fn backend_init(backend: &'static str, reason: impl Into<String>) -> Self {
        Self::BackendInit {
            backend,
            reason: reason.into(),
        }
    }

    /// Log this error as a rejected boundary call.
    ///
    /// Constructors never log; this is the one place an error is reported.
    /// Returns `self` so call sites can log and convert in one expression.
    pub fn reject(self) -> Self {
        #[cfg(feature = "tracing")]
        error!("{}", self);
        self
    }
}
