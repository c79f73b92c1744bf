use crate::di::Token;
use crate::types::{DependencyClass, DependencyInstance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetime policy of a registered dependency.
///
/// The declaration order is load-bearing: kinds are ordered by lifetime
/// length (`Transient < Scoped < Singleton`) and the captive-dependency rule
/// compares dependent and dependency through this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionKind {
    /// New instance on every resolution; never cached.
    Transient,
    /// One instance per logical scope, dropped by an explicit scope reset.
    Scoped,
    /// One instance per container for the container's lifetime.
    Singleton,
}

impl ResolutionKind {
    /// Canonical upper-case name, used in error and log text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transient => "TRANSIENT",
            Self::Scoped => "SCOPED",
            Self::Singleton => "SINGLETON",
        }
    }
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe bound into a container's registration table.
#[derive(Clone)]
pub struct RegisteredDependency {
    /// Construction recipe for the token.
    pub class: DependencyClass,
    /// Lifetime policy the recipe was registered under.
    pub kind: ResolutionKind,
}

/// A resolved value held in the container cache, tagged with the kind it
/// was resolved under so scope resets can drop exactly the scoped slice.
#[derive(Clone)]
pub struct CachedResolvedDependency {
    /// The constructed instance.
    pub value: DependencyInstance,
    /// Kind recorded at construction time.
    pub kind: ResolutionKind,
}

/// What to do when a token registers twice with the same container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateBehavior {
    /// Fail the second registration.
    #[default]
    Throw,
    /// Keep the first registration and ignore the second.
    Ignore,
}

/// Options accepted by the `register_*_with` operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterOptions {
    /// Duplicate-registration handling; defaults to [`DuplicateBehavior::Throw`].
    pub on_duplicate: DuplicateBehavior,
}

/// Per-container configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Enforce the captive-dependency rule during resolution.
    pub check_for_captive_dependencies: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            check_for_captive_dependencies: true,
        }
    }
}

/// Registration argument: either a bare class (an implicit token is derived
/// from the class name) or an explicit token bound to a recipe.
pub enum DependencySpec {
    /// Register the class under its memoized implicit token.
    Class(DependencyClass),
    /// Register the recipe under the given token.
    Bound(Token, DependencyClass),
}

impl From<DependencyClass> for DependencySpec {
    fn from(class: DependencyClass) -> Self {
        Self::Class(class)
    }
}

impl From<(Token, DependencyClass)> for DependencySpec {
    fn from((token, class): (Token, DependencyClass)) -> Self {
        Self::Bound(token, class)
    }
}

/// Resolution argument: an explicit token, or a class whose implicit token
/// is derived before any resolver logic runs.
pub enum ResolveTarget {
    /// Resolve the given token.
    Token(Token),
    /// Resolve the class's memoized implicit token.
    Class(DependencyClass),
}

impl From<Token> for ResolveTarget {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<DependencyClass> for ResolveTarget {
    fn from(class: DependencyClass) -> Self {
        Self::Class(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_kind_ordering() {
        assert!(ResolutionKind::Transient < ResolutionKind::Scoped);
        assert!(ResolutionKind::Scoped < ResolutionKind::Singleton);
        assert!(ResolutionKind::Transient < ResolutionKind::Singleton);
    }

    #[test]
    fn test_resolution_kind_names() {
        assert_eq!(ResolutionKind::Transient.as_str(), "TRANSIENT");
        assert_eq!(ResolutionKind::Scoped.as_str(), "SCOPED");
        assert_eq!(ResolutionKind::Singleton.as_str(), "SINGLETON");
    }

    #[test]
    fn test_container_config_defaults() {
        let config = ContainerConfig::default();
        assert!(config.check_for_captive_dependencies);
    }

    #[test]
    fn test_container_config_from_json() {
        let config: ContainerConfig = serde_json::from_str("{}").unwrap();
        assert!(config.check_for_captive_dependencies);

        let config: ContainerConfig =
            serde_json::from_str(r#"{"check_for_captive_dependencies": false}"#).unwrap();
        assert!(!config.check_for_captive_dependencies);
    }

    #[test]
    fn test_register_options_default_to_throw() {
        let options = RegisterOptions::default();
        assert_eq!(options.on_duplicate, DuplicateBehavior::Throw);
    }
}
