use super::ConfigStore;
use crate::config::ConnectionConfig;
use crate::error::{FiltersError, Result};
use std::fs;
use std::path::PathBuf;

const CONFIG_FILENAME: &str = "connection.json";

pub struct FileStore {
    config_dir: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Result<ConnectionConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(ConnectionConfig::default());
        }

        let content = fs::read_to_string(&path).map_err(FiltersError::Io)?;
        let config: ConnectionConfig =
            serde_json::from_str(&content).map_err(FiltersError::Serialization)?;
        Ok(config)
    }

    fn save(&mut self, config: &ConnectionConfig) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir).map_err(FiltersError::Io)?;
        }

        let content = serde_json::to_string_pretty(config).map_err(FiltersError::Serialization)?;
        fs::write(self.config_path(), content).map_err(FiltersError::Io)?;
        Ok(())
    }
}
