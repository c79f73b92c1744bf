use crate::di::Token;
use crate::metadata::types::{ClassMetadata, ParameterType};
use std::collections::HashMap;

/// Source of per-class constructor metadata.
///
/// The resolver consults this at every graph node. Implementations return
/// empty results for classes they know nothing about; a zero-parameter
/// constructor and an unregistered class look identical here, by contract.
pub trait MetadataSource: Send + Sync {
    /// Manual-injection overrides for the class, keyed by parameter index.
    fn manual_injection_map(&self, class_name: &str) -> HashMap<usize, Token>;

    /// Ordered reflected constructor parameter types for the class.
    fn reflected_parameter_types(&self, class_name: &str) -> Vec<ParameterType>;
}

/// Bootstrap-populated metadata registry.
///
/// Populate during application startup, then share read-only with the
/// containers that resolve against it.
#[derive(Default)]
pub struct MetadataRegistry {
    classes: HashMap<String, ClassMetadata>,
}

impl MetadataRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit the metadata record for a class, replacing any previous one.
    pub fn register(&mut self, class_name: impl Into<String>, metadata: ClassMetadata) {
        let class_name = class_name.into();
        log::debug!("depositing constructor metadata for \"{class_name}\"");
        self.classes.insert(class_name, metadata);
    }

    /// Whether a metadata record exists for the class.
    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }
}

impl MetadataSource for MetadataRegistry {
    fn manual_injection_map(&self, class_name: &str) -> HashMap<usize, Token> {
        self.classes
            .get(class_name)
            .map(|metadata| metadata.manual_injections().clone())
            .unwrap_or_default()
    }

    fn reflected_parameter_types(&self, class_name: &str) -> Vec<ParameterType> {
        self.classes
            .get(class_name)
            .map(|metadata| metadata.parameter_types().to_vec())
            .unwrap_or_default()
    }
}

/// Metadata source with no records, for graphs of leaf dependencies only.
pub struct EmptyMetadata;

impl MetadataSource for EmptyMetadata {
    fn manual_injection_map(&self, _class_name: &str) -> HashMap<usize, Token> {
        HashMap::new()
    }

    fn reflected_parameter_types(&self, _class_name: &str) -> Vec<ParameterType> {
        Vec::new()
    }
}
