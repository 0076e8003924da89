//! User settings for Terminal Budget
//!
//! Manages preferences such as the currency symbol, the export file name,
//! audit logging and the public IP lookup.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// Public IP lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLookupSettings {
    /// Whether the TUI header performs the lookup at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Endpoint returning the caller's address as plain text
    #[serde(default = "default_ip_lookup_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_ip_lookup_timeout")]
    pub timeout_secs: u64,
}

impl Default for IpLookupSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_ip_lookup_url(),
            timeout_secs: default_ip_lookup_timeout(),
        }
    }
}

/// User settings for Terminal Budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Default file name for exports
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Public IP lookup shown in the TUI header
    #[serde(default)]
    pub ip_lookup: IpLookupSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

fn default_export_file_name() -> String {
    "budget_export.json".to_string()
}

fn default_ip_lookup_url() -> String {
    "https://api.ipify.org".to_string()
}

fn default_ip_lookup_timeout() -> u64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            audit_enabled: true,
            export_file_name: default_export_file_name(),
            ip_lookup: IpLookupSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
