//! # NEXIUM TYPE DEFINITIONS
//!
//! **CRITICAL**: Core value model for dependency construction
//! **MANDATE**: ALL resolved values travel as `DependencyInstance`

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// **RESOLVED VALUE CONTAINER**
///
/// **PURPOSE**: Type-erased, shareable product of a construction recipe
/// **GUARANTEE**: One allocation can back every dependent of a cached value
pub type DependencyInstance = Arc<dyn Any + Send + Sync>;

/// **CONSTRUCTION CALLBACK**
///
/// Receives the already-resolved constructor arguments in declaration order
/// and produces the instance.
pub type ConstructorFn = Arc<dyn Fn(Vec<DependencyInstance>) -> DependencyInstance + Send + Sync>;

/// **CONSTRUCTION RECIPE**
///
/// **PURPOSE**: Explicit stand-in for a class constructor
/// **GUARANTEE**: The name is the stable identity used for implicit tokens
/// and metadata lookup; the callback never sees an unresolved argument.
#[derive(Clone)]
pub struct DependencyClass {
    name: String,
    constructor: ConstructorFn,
}

impl DependencyClass {
    /// **CONSTRUCTOR**
    pub fn new<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(Vec<DependencyInstance>) -> DependencyInstance + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            constructor: Arc::new(constructor),
        }
    }

    /// **CLASS NAME**
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the recipe with already-resolved arguments.
    pub fn construct(&self, arguments: Vec<DependencyInstance>) -> DependencyInstance {
        (self.constructor)(arguments)
    }
}

impl fmt::Debug for DependencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyClass")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
