use crate::di::resolver::DependencyResolver;
use crate::di::types::{
    CachedResolvedDependency, ContainerConfig, DependencySpec, DuplicateBehavior, RegisterOptions,
    RegisteredDependency, ResolutionKind, ResolveTarget,
};
use crate::di::Token;
use crate::errors::DiError;
use crate::metadata::{EmptyMetadata, MetadataSource};
use crate::types::{DependencyClass, DependencyInstance};
use std::collections::HashMap;
use std::sync::Arc;

/// One named scope of the application: a registration table pairing tokens
/// with recipes, plus the per-lifetime cache of resolved values.
///
/// All state is plain map state behind `&mut self`; nothing locks
/// internally. Registration and first-time resolution must be serialized by
/// the caller when threads are involved.
pub struct Container {
    container_config: ContainerConfig,
    metadata: Arc<dyn MetadataSource>,
    registered_dependencies: HashMap<Token, RegisteredDependency>,
    cached_resolved_dependencies: HashMap<Token, CachedResolvedDependency>,
    self_created_dependency_tokens: HashMap<String, Token>,
}

impl Container {
    /// Container with default configuration.
    pub fn new(metadata: Arc<dyn MetadataSource>) -> Self {
        Self::with_config(metadata, ContainerConfig::default())
    }

    /// Container with explicit configuration.
    pub fn with_config(metadata: Arc<dyn MetadataSource>, container_config: ContainerConfig) -> Self {
        Self {
            container_config,
            metadata,
            registered_dependencies: HashMap::new(),
            cached_resolved_dependencies: HashMap::new(),
            self_created_dependency_tokens: HashMap::new(),
        }
    }

    /// Register a singleton dependency.
    pub fn register_singleton(&mut self, spec: impl Into<DependencySpec>) -> Result<(), DiError> {
        self.register_singleton_with(spec, RegisterOptions::default())
    }

    /// Register a singleton dependency with explicit options.
    pub fn register_singleton_with(
        &mut self,
        spec: impl Into<DependencySpec>,
        options: RegisterOptions,
    ) -> Result<(), DiError> {
        self.register_dependency_once(ResolutionKind::Singleton, spec.into(), options)
    }

    /// Register a transient dependency.
    pub fn register_transient(&mut self, spec: impl Into<DependencySpec>) -> Result<(), DiError> {
        self.register_transient_with(spec, RegisterOptions::default())
    }

    /// Register a transient dependency with explicit options.
    pub fn register_transient_with(
        &mut self,
        spec: impl Into<DependencySpec>,
        options: RegisterOptions,
    ) -> Result<(), DiError> {
        self.register_dependency_once(ResolutionKind::Transient, spec.into(), options)
    }

    /// Register a scoped dependency.
    pub fn register_scoped(&mut self, spec: impl Into<DependencySpec>) -> Result<(), DiError> {
        self.register_scoped_with(spec, RegisterOptions::default())
    }

    /// Register a scoped dependency with explicit options.
    pub fn register_scoped_with(
        &mut self,
        spec: impl Into<DependencySpec>,
        options: RegisterOptions,
    ) -> Result<(), DiError> {
        self.register_dependency_once(ResolutionKind::Scoped, spec.into(), options)
    }

    /// Resolve a fully constructed instance for a token or a bare class.
    ///
    /// A bare class is normalized to its memoized implicit token before any
    /// resolver logic runs.
    pub fn resolve(
        &mut self,
        target: impl Into<ResolveTarget>,
    ) -> Result<DependencyInstance, DiError> {
        let token = match target.into() {
            ResolveTarget::Token(token) => token,
            ResolveTarget::Class(class) => self.create_dependency_token(&class),
        };

        DependencyResolver::new(self).resolve_dependency(&token, None)
    }

    /// Memoized implicit token for a class, created on first use.
    ///
    /// Stable within this container, independent across containers.
    pub fn create_dependency_token(&mut self, class: &DependencyClass) -> Token {
        if let Some(token) = self.self_created_dependency_tokens.get(class.name()) {
            return token.clone();
        }

        let token = Token::new(class.name());
        self.self_created_dependency_tokens
            .insert(class.name().to_string(), token.clone());

        token
    }

    /// Drop every cached value resolved under the scoped kind, marking the
    /// end of a logical scope. Singleton entries and the registration table
    /// are untouched.
    pub fn reset_scoped_dependencies(&mut self) {
        let before = self.cached_resolved_dependencies.len();
        self.cached_resolved_dependencies
            .retain(|_, cached| cached.kind != ResolutionKind::Scoped);

        log::debug!(
            "scope reset dropped {} cached dependencies",
            before - self.cached_resolved_dependencies.len()
        );
    }

    fn register_dependency_once(
        &mut self,
        kind: ResolutionKind,
        spec: DependencySpec,
        options: RegisterOptions,
    ) -> Result<(), DiError> {
        let (token, class) = match spec {
            DependencySpec::Class(class) => (self.create_dependency_token(&class), class),
            DependencySpec::Bound(token, class) => (token, class),
        };

        if self.registered_dependencies.contains_key(&token) {
            return match options.on_duplicate {
                DuplicateBehavior::Throw => Err(DiError::DuplicateDependency {
                    dependency_name: class.name().to_string(),
                }),
                DuplicateBehavior::Ignore => Ok(()),
            };
        }

        log::debug!("registering \"{}\" as {}", class.name(), kind);
        self.registered_dependencies
            .insert(token, RegisteredDependency { class, kind });

        Ok(())
    }

    pub(crate) fn container_config(&self) -> &ContainerConfig {
        &self.container_config
    }

    pub(crate) fn metadata(&self) -> &Arc<dyn MetadataSource> {
        &self.metadata
    }

    pub(crate) fn registered_dependency(&self, token: &Token) -> Option<&RegisteredDependency> {
        self.registered_dependencies.get(token)
    }

    pub(crate) fn cached_resolved_dependency(
        &self,
        token: &Token,
    ) -> Option<&CachedResolvedDependency> {
        self.cached_resolved_dependencies.get(token)
    }

    pub(crate) fn cache_resolved_dependency(
        &mut self,
        token: Token,
        cached: CachedResolvedDependency,
    ) {
        self.cached_resolved_dependencies.insert(token, cached);
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(Arc::new(EmptyMetadata))
    }
}
