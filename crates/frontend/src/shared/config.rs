use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub remote: RemoteConfig,
    pub contact: ContactConfig,
}

/// localStorage keys
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// User-editable catalog
    pub custom_key: String,
    /// Read-only default dataset
    pub local_key: String,
    pub theme_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Image assigned to every card created from the form
    pub placeholder_img: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RemoteConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub message_max_len: usize,
    pub message_warn_remaining: usize,
    pub inline_error_ms: u32,
    pub purpose_info_ms: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            custom_key: "gameDataCustom".to_string(),
            local_key: "gameDataLocal".to_string(),
            theme_key: "theme".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            placeholder_img: "images/default.jpg".to_string(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: "https://my-json-server.typicode.com/atran032/cse134-portfolio-data/games"
                .to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            message_max_len: 500,
            message_warn_remaining: 50,
            inline_error_ms: 5000,
            purpose_info_ms: 7000,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storage]
custom_key = "gameDataCustom"
local_key = "gameDataLocal"
theme_key = "theme"

[catalog]
placeholder_img = "images/default.jpg"

[remote]
url = "https://my-json-server.typicode.com/atran032/cse134-portfolio-data/games"

[contact]
message_max_len = 500
message_warn_remaining = 50
inline_error_ms = 5000
purpose_info_ms = 7000
"#;

/// Parse a TOML configuration document
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid embedded config, using defaults: {}", e);
        AppConfig::default()
    }
});

/// Application configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config_falls_back_per_field() {
        let config = parse_config("[storage]\ncustom_key = \"myGames\"\n").unwrap();
        assert_eq!(config.storage.custom_key, "myGames");
        assert_eq!(config.storage.local_key, "gameDataLocal");
        assert_eq!(config.contact.message_max_len, 500);
    }
}
