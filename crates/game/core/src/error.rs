//! Common error infrastructure for hollows-core.
//!
//! Domain errors live next to the types they validate ([`ConfigError`] with
//! [`crate::AlertConfig`], [`RouteError`] with [`crate::PatrolRoute`]). This
//! module holds the shared severity classification and the trait every error
//! enum in the workspace implements.
//!
//! The behavior controller itself never returns errors from `tick`: a broken
//! configuration or a missing collaborator degrades the enemy to an idle
//! state and is reported through `tracing` instead.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request can succeed later or with a different input.
    ///
    /// Examples: crafting without the required items, using an empty slot.
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: negative chase range, empty patrol route given to a strict loader.
    Validation,

    /// Unexpected inconsistency that indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all hollows error enums.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not by gameplay impact
pub trait HollowsError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejected tunable in an [`crate::AlertConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

impl HollowsError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPositive { .. } => "CONFIG_NOT_POSITIVE",
        }
    }
}

/// Rejected patrol route.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("patrol route has no waypoints")]
    Empty,

    #[error("waypoint {index} is not a finite position")]
    NonFiniteWaypoint { index: usize },
}

impl HollowsError for RouteError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ROUTE_EMPTY",
            Self::NonFiniteWaypoint { .. } => "ROUTE_NON_FINITE",
        }
    }
}
