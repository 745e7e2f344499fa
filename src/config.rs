use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::diagram::DEFAULT_RENDER_HOST;

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_CONFIG_FILE: &str = "workflow-diagram.toml";

pub const BASE_URL_VAR: &str = "FRAPPE_BASE_URL";
pub const API_KEY_VAR: &str = "FRAPPE_API_KEY";
pub const API_SECRET_VAR: &str = "FRAPPE_API_SECRET";
pub const RENDER_HOST_VAR: &str = "WORKFLOW_DIAGRAM_RENDER_HOST";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment file not found: {}", .0.display())]
    EnvFileNotFound(PathBuf),

    #[error("Failed to load environment file {}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Missing required setting {0}")]
    MissingSetting(&'static str),

    #[error("Invalid configuration")]
    Invalid(#[from] config::ConfigError),
}

/// Main configuration structure for workflow-diagram
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowDiagramConfig {
    /// Frappe API connection settings
    #[serde(default)]
    pub frappe: FrappeConfig,
    /// Diagram rendering settings
    pub diagram: DiagramConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrappeConfig {
    /// Site root, e.g. `https://erp.example.com`
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagramConfig {
    /// Kroki host the generated link points at
    pub render_host: String,
}

impl Default for WorkflowDiagramConfig {
    fn default() -> Self {
        Self {
            frappe: FrappeConfig::default(),
            diagram: DiagramConfig {
                render_host: DEFAULT_RENDER_HOST.to_string(),
            },
        }
    }
}

impl FrappeConfig {
    /// Value of the `Authorization` header Frappe expects for API key auth
    pub fn authorization(&self) -> String {
        format!("token {}:{}", self.api_key, self.api_secret)
    }

    /// Fail on the first credential that is missing or blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingSetting(BASE_URL_VAR));
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingSetting(API_KEY_VAR));
        }
        if self.api_secret.trim().is_empty() {
            return Err(ConfigError::MissingSetting(API_SECRET_VAR));
        }
        Ok(())
    }
}

impl WorkflowDiagramConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. `workflow-diagram.toml` in the working directory, if present
    /// 3. Environment variables (`WORKFLOW_DIAGRAM__SECTION__KEY`)
    /// 4. `FRAPPE_*` credentials and `WORKFLOW_DIAGRAM_RENDER_HOST`
    ///
    /// The env file must exist; it is loaded before any of the above.
    pub fn load(env_file: &Path) -> Result<Self, ConfigError> {
        Self::load_with(env_file, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// [`load`](Self::load) with an explicit path for the optional config file.
    pub fn load_with(env_file: &Path, config_file: &Path) -> Result<Self, ConfigError> {
        Self::load_env_file(env_file)?;

        let defaults = Self::default();
        let config = Config::builder()
            .set_default("diagram.render_host", defaults.diagram.render_host)?
            .add_source(File::from(config_file).required(false))
            .add_source(
                Environment::with_prefix("WORKFLOW_DIAGRAM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut workflow_config: WorkflowDiagramConfig = config.try_deserialize()?;
        workflow_config.apply_overrides(|key| std::env::var(key).ok());
        workflow_config.frappe.validate()?;

        tracing::info!(
            base_url = %workflow_config.frappe.base_url,
            render_host = %workflow_config.diagram.render_host,
            "Configuration loaded successfully"
        );
        Ok(workflow_config)
    }

    /// Load the env file into the process environment. A missing file is fatal.
    pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::EnvFileNotFound(path.to_path_buf()));
        }
        dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded environment variables from env file");
        Ok(())
    }

    /// Apply the well-known variables on top of layered values.
    /// Blank values are ignored so they cannot wipe a file setting.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = non_blank(BASE_URL_VAR) {
            self.frappe.base_url = base_url;
        }
        if let Some(api_key) = non_blank(API_KEY_VAR) {
            self.frappe.api_key = api_key;
        }
        if let Some(api_secret) = non_blank(API_SECRET_VAR) {
            self.frappe.api_secret = api_secret;
        }
        if let Some(render_host) = non_blank(RENDER_HOST_VAR) {
            self.diagram.render_host = render_host;
        }

        self.frappe.base_url = self.frappe.base_url.trim_end_matches('/').to_string();
    }
}
