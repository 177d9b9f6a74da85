//! Error types for the scene engine
//!
//! Only two failures propagate to callers: a document that cannot be
//! loaded, and a property edit that does not validate. Everything
//! per-entity is downgraded to a warning (see [`crate::notification`])
//! and skipped.

use crate::types::Handle;
use std::io;
use thiserror::Error;

/// Main error type for scene operations
#[derive(Debug, Error)]
pub enum SceneError {
    /// IO error surfaced by the document collaborator
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Document could not be read or parsed; the prior scene is untouched
    #[error("{context}: {message}")]
    Load {
        /// What was being attempted, e.g. the filename
        context: String,
        /// The underlying cause
        message: String,
    },

    /// A property-edit field did not parse as a number
    #[error("invalid value for {field}: {value:?}")]
    Validation {
        /// Field name as shown to the user
        field: &'static str,
        /// The rejected input
        value: String,
    },

    /// The referenced entity is not in the scene
    #[error("no entity with handle {0}")]
    EntityNotFound(Handle),

    /// A patch of one kind was applied to an entity of another
    #[error("property patch does not match entity kind: {0}")]
    KindMismatch(&'static str),
}

impl SceneError {
    /// Build a load error with context
    pub fn load(context: impl Into<String>, message: impl Into<String>) -> Self {
        SceneError::Load {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Build a validation error for a rejected field value
    pub fn validation(field: &'static str, value: impl Into<String>) -> Self {
        SceneError::Validation {
            field,
            value: value.into(),
        }
    }
}

/// Result type alias for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
