use super::ConfigStore;
use crate::config::ConnectionConfig;
use crate::error::Result;
use crate::model::FilterRecord;

/// In-memory store for tests.
///
/// Tracks how many times `save` ran so tests can assert that cancelled or
/// failed operations never persist anything.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    config: ConnectionConfig,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: Vec<FilterRecord>) -> Self {
        Self {
            config: ConnectionConfig {
                object_filters: filters,
                ..Default::default()
            },
            save_count: 0,
        }
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// The filters as currently stored (not as last loaded).
    pub fn filters(&self) -> &[FilterRecord] {
        &self.config.object_filters
    }
}

impl ConfigStore for InMemoryStore {
    fn load(&self) -> Result<ConnectionConfig> {
        Ok(self.config.clone())
    }

    fn save(&mut self, config: &ConnectionConfig) -> Result<()> {
        self.config = config.clone();
        self.save_count += 1;
        Ok(())
    }
}
