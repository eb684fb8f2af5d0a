use crate::projection::ScopePath;
use crate::types::TypeAnnotation;
use thiserror::Error;

/// A structural failure that aborts the projection of one operation or
/// fragment.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error(
        "Two selections of `{response_key}` at `{scope_path}` disagree on \
        their type: `{first_type}` vs `{second_type}`."
    )]
    ConflictingFieldTypes {
        first_type: TypeAnnotation,
        response_key: String,
        scope_path: ScopePath,
        second_type: TypeAnnotation,
    },

    #[error(
        "The selection set at `{scope_path}` can not resolve to any concrete \
        type."
    )]
    EmptyVariantSet {
        scope_path: ScopePath,
    },

    #[error(
        "The selection set at `{scope_path}` is nested more than {max_depth} \
        levels deep."
    )]
    MaxDepthExceeded {
        max_depth: usize,
        scope_path: ScopePath,
    },

    #[error("Attempted to pop a segment off of an empty scope path")]
    ScopeImbalance,
}
impl ProjectionError {
    /// The scope path at which this error was encountered (if known).
    pub fn scope_path(&self) -> Option<&ScopePath> {
        match self {
            Self::ConflictingFieldTypes { scope_path, .. }
                | Self::EmptyVariantSet { scope_path }
                | Self::MaxDepthExceeded { scope_path, .. }
                => Some(scope_path),
            Self::ScopeImbalance => None,
        }
    }
}

/// A [`ProjectionError`] along with the operation or fragment whose
/// projection it aborted.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Failed to project {unit_name}: {error}")]
pub struct ProjectionFailure {
    #[source]
    pub(crate) error: ProjectionError,
    pub(crate) unit_name: String,
}
impl ProjectionFailure {
    pub fn error(&self) -> &ProjectionError {
        &self.error
    }

    pub fn unit_name(&self) -> &str {
        self.unit_name.as_str()
    }
}
