//! Error types for style resolution and live application

use thiserror::Error;

/// Errors raised while resolving style references into property lists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// Reference to a style not present in the resolved group.
    #[error("unknown style `{name}`")]
    UnknownStyle { name: String },

    /// Qualified reference to a global group that is not registered.
    #[error("unknown style group `{group}`")]
    UnknownGroup { group: String },

    /// A qualified reference with the wrong shape (not `:group:name`).
    #[error("style reference `{reference}` has wrong format")]
    Malformed { reference: String },

    /// Style extension chains looped back on themselves.
    #[error("cyclic style extension: {}", chain.join(" -> "))]
    CyclicExtension { chain: Vec<String> },
}

impl StyleError {
    pub fn unknown_style(name: impl Into<String>) -> Self {
        Self::UnknownStyle { name: name.into() }
    }

    pub fn unknown_group(group: impl Into<String>) -> Self {
        Self::UnknownGroup {
            group: group.into(),
        }
    }

    pub fn malformed(reference: impl Into<String>) -> Self {
        Self::Malformed {
            reference: reference.into(),
        }
    }

    pub fn cyclic(chain: Vec<String>) -> Self {
        Self::CyclicExtension { chain }
    }
}

/// Errors raised by the live backend. One such error is surfaced per
/// failing apply call; generation never raises.
#[derive(Debug, Error)]
pub enum LiveApplyError {
    /// A constraint referenced an identity absent from the association
    /// list built during the construction pass.
    #[error("couldn't find view with name `{name}` in view hierarchy")]
    MissingTargetView { name: String },

    /// A field-bound element has no registered binding and the host does
    /// not support dynamic field storage.
    #[error("undefined field `{field}`")]
    UndefinedField { field: String },

    /// The host callback declined a resolved constraint handle.
    #[error("constraint cannot be set to field `{field}`")]
    ConstraintFieldRejected { field: String },

    /// Style resolution failed; the live backend has no leniency path.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Instantiation or property application failed in the host toolkit.
    #[error("toolkit error: {message}")]
    Toolkit { message: String },
}

impl LiveApplyError {
    pub fn missing_target_view(name: impl Into<String>) -> Self {
        Self::MissingTargetView { name: name.into() }
    }

    pub fn undefined_field(field: impl Into<String>) -> Self {
        Self::UndefinedField {
            field: field.into(),
        }
    }

    pub fn field_rejected(field: impl Into<String>) -> Self {
        Self::ConstraintFieldRejected {
            field: field.into(),
        }
    }

    pub fn toolkit(message: impl Into<String>) -> Self {
        Self::Toolkit {
            message: message.into(),
        }
    }
}
