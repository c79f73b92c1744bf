use crate::di::container::Container;
use crate::di::types::{CachedResolvedDependency, RegisteredDependency, ResolutionKind};
use crate::di::Token;
use crate::errors::DiError;
use crate::metadata::ParameterType;
use crate::types::DependencyInstance;
use std::sync::Arc;

/// Recursive graph-construction engine, one per container resolution.
///
/// Holds a mutable back-reference to its container for registration lookup,
/// cache access and implicit-token creation, plus the in-progress resolution
/// path used to reject registration cycles.
pub struct DependencyResolver<'c> {
    container: &'c mut Container,
    resolution_chain: Vec<Token>,
}

impl<'c> DependencyResolver<'c> {
    pub(crate) fn new(container: &'c mut Container) -> Self {
        Self {
            container,
            resolution_chain: Vec::new(),
        }
    }

    /// Resolve a token, enforcing the captive-dependency rule against the
    /// dependent currently under construction, if any.
    pub(crate) fn resolve_dependency(
        &mut self,
        token: &Token,
        parent_dependency: Option<&RegisteredDependency>,
    ) -> Result<DependencyInstance, DiError> {
        let registered = self
            .container
            .registered_dependency(token)
            .cloned()
            .ok_or_else(|| DiError::MissingDependency {
                token_name: token.name().to_string(),
            })?;

        if let Some(parent) = parent_dependency {
            if self.container.container_config().check_for_captive_dependencies {
                verify_captive_dependency_constraint(parent, &registered)?;
            }
        }

        if self.resolution_chain.contains(token) {
            let mut chain: Vec<String> = self
                .resolution_chain
                .iter()
                .map(|entry| entry.name().to_string())
                .collect();
            chain.push(token.name().to_string());

            return Err(DiError::CircularDependency { chain });
        }

        match registered.kind {
            ResolutionKind::Transient => self.resolve_dependency_chain(token, &registered),
            ResolutionKind::Scoped | ResolutionKind::Singleton => {
                if let Some(cached) = self.container.cached_resolved_dependency(token) {
                    log::debug!("cache hit for \"{}\"", token.name());
                    return Ok(Arc::clone(&cached.value));
                }

                let value = self.resolve_dependency_chain(token, &registered)?;
                self.container.cache_resolved_dependency(
                    token.clone(),
                    CachedResolvedDependency {
                        value: Arc::clone(&value),
                        kind: registered.kind,
                    },
                );

                Ok(value)
            }
        }
    }

    /// Construct the recipe bottom-up: determine the token of every
    /// constructor parameter, resolve each in index order, then invoke the
    /// constructor with the results in that same order.
    fn resolve_dependency_chain(
        &mut self,
        token: &Token,
        registered: &RegisteredDependency,
    ) -> Result<DependencyInstance, DiError> {
        let class = &registered.class;
        let manual_injections = self.container.metadata().manual_injection_map(class.name());
        let parameter_types = self
            .container
            .metadata()
            .reflected_parameter_types(class.name());

        if manual_injections.is_empty() && parameter_types.is_empty() {
            log::debug!("constructing \"{}\" with no dependencies", class.name());
            return Ok(class.construct(Vec::new()));
        }

        // Manual overrides can sit past the end of the reflected list.
        let manual_span = manual_injections.keys().max().map_or(0, |index| index + 1);
        let argument_count = manual_span.max(parameter_types.len());

        let mut argument_tokens = Vec::with_capacity(argument_count);
        for index in 0..argument_count {
            let argument_token = if let Some(manual_token) = manual_injections.get(&index) {
                manual_token.clone()
            } else {
                match parameter_types.get(index) {
                    Some(ParameterType::Class(parameter_class)) => {
                        self.container.create_dependency_token(parameter_class)
                    }
                    Some(ParameterType::Unknown) | None => {
                        return Err(DiError::InvalidDependency {
                            parameter_index: index,
                            dependent_name: class.name().to_string(),
                        });
                    }
                }
            };

            argument_tokens.push(argument_token);
        }

        self.resolution_chain.push(token.clone());
        let arguments = self.resolve_arguments(&argument_tokens, registered);
        self.resolution_chain.pop();
        let arguments = arguments?;

        log::debug!(
            "constructing \"{}\" with {} dependencies",
            class.name(),
            arguments.len()
        );
        Ok(class.construct(arguments))
    }

    fn resolve_arguments(
        &mut self,
        argument_tokens: &[Token],
        parent_dependency: &RegisteredDependency,
    ) -> Result<Vec<DependencyInstance>, DiError> {
        let mut arguments = Vec::with_capacity(argument_tokens.len());
        for argument_token in argument_tokens {
            arguments.push(self.resolve_dependency(argument_token, Some(parent_dependency))?);
        }

        Ok(arguments)
    }
}

/// The rule is satisfied iff the dependent's lifetime is no longer than the
/// dependency's: a transient captured inside a singleton would silently
/// become a singleton itself.
fn verify_captive_dependency_constraint(
    dependent: &RegisteredDependency,
    dependency: &RegisteredDependency,
) -> Result<(), DiError> {
    if dependent.kind <= dependency.kind {
        return Ok(());
    }

    Err(DiError::CaptiveDependency {
        dependent_name: dependent.class.name().to_string(),
        dependent_kind: dependent.kind,
        dependency_name: dependency.class.name().to_string(),
        dependency_kind: dependency.kind,
    })
}
