use crate::di::container::Container;
use crate::di::types::ContainerConfig;
use crate::metadata::MetadataSource;
use std::collections::HashMap;
use std::sync::Arc;

/// Name selected when a caller asks for a container without naming one.
pub const DEFAULT_CONTAINER_NAME: &str = "Default";

/// Process-wide registry mapping a container name to its one container
/// instance, created lazily on first request.
///
/// Construct a single factory at application start, hand it the bootstrap
/// metadata, and let it live until process exit; every container it creates
/// shares the factory's metadata source and configuration.
pub struct ContainerFactory {
    metadata: Arc<dyn MetadataSource>,
    container_config: ContainerConfig,
    container_instances: HashMap<String, Container>,
}

impl ContainerFactory {
    /// Factory with default container configuration.
    pub fn new(metadata: Arc<dyn MetadataSource>) -> Self {
        Self::with_config(metadata, ContainerConfig::default())
    }

    /// Factory with explicit container configuration.
    pub fn with_config(metadata: Arc<dyn MetadataSource>, container_config: ContainerConfig) -> Self {
        Self {
            metadata,
            container_config,
            container_instances: HashMap::new(),
        }
    }

    /// The default container, shared by all unnamed callers.
    pub fn get_container(&mut self) -> &mut Container {
        self.get_container_named(DEFAULT_CONTAINER_NAME)
    }

    /// The container registered under `name`, created on first request.
    /// Repeated requests with the same name return the same instance.
    pub fn get_container_named(&mut self, name: &str) -> &mut Container {
        if !self.container_instances.contains_key(name) {
            log::debug!("creating container \"{name}\"");
        }

        self.container_instances
            .entry(name.to_string())
            .or_insert_with(|| {
                Container::with_config(Arc::clone(&self.metadata), self.container_config)
            })
    }
}
