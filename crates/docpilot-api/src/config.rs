use std::path::{Path, PathBuf};

use config::{Config as ConfigLoader, ConfigError, File};
use docpilot_views::{CopilotSettings, DraftingSettings};
use serde::Deserialize;

/// Environment variables that override single keys, `(variable, key)`
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("LLM_BASE_URL", "llm.base_url"),
    ("LLM_SUMMARY_MODEL", "llm.summary_model"),
    ("LLM_CHAT_MODEL", "llm.chat_model"),
    ("LLM_TEMPERATURE", "llm.temperature"),
    ("DRAFTING_MIN_DOCUMENT_CHARS", "drafting.min_document_chars"),
    ("DRAFTING_PREVIEW_CHARS", "drafting.preview_chars"),
    ("COPILOT_HISTORY_WINDOW", "copilot.history_window"),
    ("COPILOT_STORAGE_DIR", "copilot.storage_dir"),
    ("DASHBOARD_CATALOG_PATH", "dashboard.catalog_path"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    #[serde(default)]
    pub drafting: DraftingConfig,
    #[serde(default)]
    pub copilot: CopilotConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub openai_api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// OpenAI-compatible endpoint, provider default when unset
    #[serde(default)]
    pub base_url: Option<String>,
    pub summary_model: String,
    pub chat_model: String,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftingConfig {
    pub min_document_chars: usize,
    pub preview_chars: usize,
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            min_document_chars: 10,
            preview_chars: DraftingSettings::default().preview_chars,
        }
    }
}

impl From<&DraftingConfig> for DraftingSettings {
    fn from(config: &DraftingConfig) -> Self {
        Self {
            preview_chars: config.preview_chars,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CopilotConfig {
    pub history_window: usize,
    /// Directory holding the persisted transcript
    pub storage_dir: PathBuf,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        Self {
            history_window: CopilotSettings::default().history_window,
            storage_dir: PathBuf::from("data"),
        }
    }
}

impl From<&CopilotConfig> for CopilotSettings {
    fn from(config: &CopilotConfig) -> Self {
        Self {
            history_window: config.history_window,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    /// JSON asset list; the built-in demo catalog when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (ENV defaults to `dev`)
    /// 3. Environment variables listed in `ENV_OVERRIDES`
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let mut builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        for (variable, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(variable).ok())?;
        }

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        cfg.openai_api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ConfigError::Message("OPENAI_API_KEY environment variable is required".to_string())
        })?;

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
