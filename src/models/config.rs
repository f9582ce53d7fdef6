use crate::assets::AssetLoader;
use serde::Deserialize;
use tone_filters::Filter;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Page heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Request body limit for uploads and camera frames
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Filter preselected in the menu
    #[serde(default)]
    pub default_filter: Filter,
}

fn default_title() -> String {
    "Image Filters".to_string()
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        title = %config.title,
                        max_upload_bytes = config.max_upload_bytes,
                        default_filter = %config.default_filter,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            max_upload_bytes: default_max_upload_bytes(),
            default_filter: Filter::default(),
        }
    }
}
