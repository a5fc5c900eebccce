// SPDX-License-Identifier: Apache-2.0

use crate::mail::MailConfig;
use std::env;
use std::path::PathBuf;

/// Server configuration, resolved once at startup from `ELMWOOD_*`
/// environment variables. No storage path means the service runs in
/// static-data mode with in-memory intake.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub sqlite_path: Option<PathBuf>,
    pub seed_on_start: bool,
    pub allowed_origins: Vec<String>,
    pub dev_mode: bool,
    pub log_json: bool,
    pub mail: Option<MailConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            sqlite_path: None,
            seed_on_start: false,
            allowed_origins: Vec::new(),
            dev_mode: false,
            log_json: false,
            mail: None,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("ELMWOOD_BIND").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            sqlite_path: env::var("ELMWOOD_SQLITE_PATH").ok().map(PathBuf::from),
            seed_on_start: env_bool("ELMWOOD_SEED_ON_START", false),
            allowed_origins: parse_origins(&env::var("ELMWOOD_ALLOWED_ORIGINS").unwrap_or_default()),
            dev_mode: env_bool("ELMWOOD_DEV_MODE", false),
            log_json: env_bool("ELMWOOD_LOG_JSON", false),
            mail: mail_from_env(),
        }
    }
}

fn mail_from_env() -> Option<MailConfig> {
    let endpoint = env::var("ELMWOOD_MAIL_ENDPOINT").ok()?;
    let api_key = env::var("ELMWOOD_MAIL_API_KEY").ok()?;
    let from = env::var("ELMWOOD_MAIL_FROM").ok()?;
    Some(MailConfig {
        endpoint,
        api_key,
        from,
        admin_to: env::var("ELMWOOD_ADMIN_EMAIL").ok(),
    })
}

pub(crate) fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

/// Trailing slashes are stripped so configured origins match what browsers
/// actually send in the `Origin` header.
pub(crate) fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
