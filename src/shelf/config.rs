use crate::error::{Result, ShelfError};
use crate::model::SearchField;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for shelf, stored in `.shelf/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Name of the catalog file inside the scope directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Field searched when none is given on the command line
    #[serde(default)]
    pub search_field: SearchField,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            search_field: SearchField::default(),
        }
    }
}

impl ShelfConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "search-field"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        serde_json::from_str(&content).map_err(|source| ShelfError::Parse {
            path: config_path,
            source,
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "search-field" => Some(self.search_field.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                let is_plain_name = !value.is_empty()
                    && Path::new(value).file_name().and_then(|n| n.to_str()) == Some(value);
                if !is_plain_name {
                    return Err(format!("data-file must be a plain file name, got '{}'", value));
                }
                self.data_file = value.to_string();
                Ok(())
            }
            "search-field" => {
                self.search_field = value.parse()?;
                Ok(())
            }
            _ => Err(format!(
                "Unknown config key: {} (known keys: {})",
                key,
                Self::KEYS.join(", ")
            )),
        }
    }
}
