//! Configuration for punchclock.
//!
//! The configuration replaces the ambient browser storage the portal used to
//! keep its company id and API location in: it is read once by a command and
//! passed explicitly to whatever needs it.
//!
//! ## Storage
//!
//! `config.json` in the platform data directory (see [`DataStorage`]). A
//! missing file yields the default, empty configuration.
//!
//! ## Environment Overrides
//!
//! `PUNCHCLOCK_API_URL` and `PUNCHCLOCK_COMPANY_ID` override the stored API
//! settings (a `.env` file is loaded at start-up). Both must be present for
//! the override to create an API section that the file lacks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::libs::config::Config;
//!
//! let config = Config::read()?.with_env_overrides();
//! if let Some(api) = &config.api {
//!     println!("Reports for company {} from {}", api.company_id, api.api_url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_URL_ENV: &str = "PUNCHCLOCK_API_URL";
pub const COMPANY_ID_ENV: &str = "PUNCHCLOCK_COMPANY_ID";

/// Connection settings for the attendance API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://api.example.com/prod`.
    pub api_url: String,
    /// Company whose attendance records are reported.
    pub company_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ReportConfig {
    /// Device whose records reports are restricted to by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Reads the stored configuration, or the default one when there is no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies `PUNCHCLOCK_API_URL` / `PUNCHCLOCK_COMPANY_ID` on top of the stored values.
    pub fn with_env_overrides(mut self) -> Self {
        let api_url = env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        let company_id = env::var(COMPANY_ID_ENV).ok().filter(|v| !v.trim().is_empty());

        self.api = match (self.api, api_url, company_id) {
            (Some(mut api), url, company) => {
                if let Some(url) = url {
                    api.api_url = url;
                }
                if let Some(company) = company {
                    api.company_id = company;
                }
                Some(api)
            }
            (None, Some(api_url), Some(company_id)) => Some(ApiConfig { api_url, company_id }),
            (None, _, _) => None,
        };
        self
    }

    /// Default device filter, if one is configured.
    pub fn device_id(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.device_id.as_deref()).filter(|d| !d.is_empty())
    }

    /// Interactive setup wizard, pre-filled with the stored values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleApi.to_string(), Message::ConfigModuleReport.to_string()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for selection in selected {
            match selection {
                0 => {
                    let default = config.api.clone().unwrap_or(ApiConfig {
                        api_url: "".to_string(),
                        company_id: "".to_string(),
                    });
                    msg_print!(Message::ConfigModuleApi);
                    config.api = Some(ApiConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        company_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCompanyId.to_string())
                            .default(default.company_id)
                            .interact_text()?,
                    });
                }
                1 => {
                    let default = config.report.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleReport);
                    let device_id: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDeviceId.to_string())
                        .default(default.device_id.unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.report = Some(ReportConfig {
                        device_id: Some(device_id.trim().to_string()).filter(|d| !d.is_empty()),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
