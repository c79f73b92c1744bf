//! Public facade re-exporting the complete container surface.

pub use crate::di::{
    Container, ContainerConfig, ContainerFactory, DependencyResolver, DependencySpec,
    DuplicateBehavior, RegisterOptions, ResolutionKind, ResolveTarget, Token,
    DEFAULT_CONTAINER_NAME,
};
pub use crate::errors::DiError;
pub use crate::metadata::{
    ClassMetadata, EmptyMetadata, MetadataRegistry, MetadataSource, ParameterType,
};
pub use crate::types::{ConstructorFn, DependencyClass, DependencyInstance};
