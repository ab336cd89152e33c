use serde::{Deserialize, Serialize};

use crate::fixtures::{GeneratorConfig, DEFAULT_IMAGE_BASE_URL};

const DEFAULT_DEMO_ISSUES: usize = 24;
const DEFAULT_DEMO_NOTIFICATIONS: usize = 8;
/// Upper bound applied to the demo record counts.
const MAX_DEMO_RECORDS: usize = 500;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: AppProfile,
    pub image_base_url: String,
    /// Fixes the demo-data RNG; unset means seed from the clock.
    pub demo_seed: Option<u64>,
    pub demo_issue_count: usize,
    pub demo_notification_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: AppProfile::Dev,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            demo_seed: None,
            demo_issue_count: DEFAULT_DEMO_ISSUES,
            demo_notification_count: DEFAULT_DEMO_NOTIFICATIONS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        let mut config = Self::default();

        config.profile = AppProfile::from_env(read_env("NAGARSEVA_PROFILE"));

        if let Some(url) = read_env("NAGARSEVA_IMAGE_BASE_URL") {
            config.image_base_url = url;
        }

        if let Some(raw) = read_env("NAGARSEVA_DEMO_SEED") {
            match raw.parse::<u64>() {
                Ok(seed) => config.demo_seed = Some(seed),
                Err(_) => tracing::warn!("ignoring unparsable NAGARSEVA_DEMO_SEED: {raw}"),
            }
        }

        if let Some(count) = read_env("NAGARSEVA_DEMO_ISSUES").and_then(|v| v.parse().ok()) {
            config.demo_issue_count = clamp_count(count);
        }

        if let Some(count) = read_env("NAGARSEVA_DEMO_NOTIFICATIONS").and_then(|v| v.parse().ok())
        {
            config.demo_notification_count = clamp_count(count);
        }

        config
    }

    /// Generator tuning derived from the app config; everything else keeps
    /// the stock demo constants.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            image_base_url: self.image_base_url.clone(),
            ..GeneratorConfig::default()
        }
    }
}

fn clamp_count(value: usize) -> usize {
    value.min(MAX_DEMO_RECORDS)
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "NAGARSEVA_PROFILE" => option_env!("NAGARSEVA_PROFILE"),
        "NAGARSEVA_IMAGE_BASE_URL" => option_env!("NAGARSEVA_IMAGE_BASE_URL"),
        "NAGARSEVA_DEMO_SEED" => option_env!("NAGARSEVA_DEMO_SEED"),
        "NAGARSEVA_DEMO_ISSUES" => option_env!("NAGARSEVA_DEMO_ISSUES"),
        "NAGARSEVA_DEMO_NOTIFICATIONS" => option_env!("NAGARSEVA_DEMO_NOTIFICATIONS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}
