//! Container runtime: token identity, registration, caching and resolution.

pub mod container;
pub mod factory;
pub mod resolver;
pub mod token;
pub mod types;

pub use container::Container;
pub use factory::{ContainerFactory, DEFAULT_CONTAINER_NAME};
pub use resolver::DependencyResolver;
pub use token::Token;
pub use types::{
    CachedResolvedDependency, ContainerConfig, DependencySpec, DuplicateBehavior, RegisterOptions,
    RegisteredDependency, ResolutionKind, ResolveTarget,
};
