//! Error taxonomy for registration and resolution failures.
//!
//! Every error is synchronous, fail-fast and non-retryable: a resolution
//! either produces a fully constructed instance or aborts with one of these.

use crate::di::ResolutionKind;
use thiserror::Error;

/// Failures raised by container registration and dependency resolution.
#[derive(Debug, Error)]
pub enum DiError {
    /// Thrown when a dependency is resolved that was never registered.
    #[error("Dependency token \"{token_name}\" not registered with the container")]
    MissingDependency {
        /// Name of the unregistered token.
        token_name: String,
    },

    /// Thrown when a dependency registers with the same container twice.
    #[error("\"{dependency_name}\" has been already registered")]
    DuplicateDependency {
        /// Name of the recipe that was registered twice.
        dependency_name: String,
    },

    /// Thrown when a shorter-lived dependency is kept captive by a
    /// longer-lived dependent.
    #[error("Captive dependency detected: {dependent_kind}[{dependent_name}] -> {dependency_kind}[{dependency_name}]")]
    CaptiveDependency {
        /// Recipe holding the captive reference.
        dependent_name: String,
        /// Resolution kind of the dependent.
        dependent_kind: ResolutionKind,
        /// Recipe being held captive.
        dependency_name: String,
        /// Resolution kind of the dependency.
        dependency_kind: ResolutionKind,
    },

    /// Thrown when a constructor parameter's type cannot be determined by
    /// manual override or reflected metadata.
    #[error("Invalid dependency at index \"{parameter_index}\" while resolving {dependent_name}")]
    InvalidDependency {
        /// Constructor parameter position that could not be resolved.
        parameter_index: usize,
        /// Recipe whose constructor was being resolved.
        dependent_name: String,
    },

    /// Thrown when a registration cycle is hit during resolution.
    #[error("Circular dependency detected: {}", .chain.join(" -> "))]
    CircularDependency {
        /// Token names along the in-progress resolution path.
        chain: Vec<String>,
    },
}
