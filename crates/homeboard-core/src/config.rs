//! Dashboard configuration.
//!
//! Holds the provider endpoints, the feed refresh cadence, the cache
//! freshness window and the checklist. Stored at
//! `~/.config/homeboard/config.json`; every field has a default so a missing
//! or partial file still yields a working dashboard.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "homeboard";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the configured weather API key
pub const WEATHER_API_KEY_ENV: &str = "HOMEBOARD_WEATHER_API_KEY";

/// Ten minutes, the cadence for all three remote feeds.
const DEFAULT_REFRESH_SECS: u64 = 600;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub weather: WeatherConfig,
    pub news: NewsConfig,
    pub currency: CurrencyConfig,
    pub refresh: RefreshConfig,
    pub cache_max_age_secs: u64,
    pub tasks: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            news: NewsConfig::default(),
            currency: CurrencyConfig::default(),
            refresh: RefreshConfig::default(),
            cache_max_age_secs: DEFAULT_REFRESH_SECS,
            tasks: vec![
                "Check email".to_string(),
                "Review pull requests".to_string(),
                "Plan tomorrow".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub url: String,
    pub city: String,
    pub units: String,
    pub api_key: Option<String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            city: "Dhaka".to_string(),
            units: "metric".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub url: String,
    pub limit: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            url: "https://news.ulkaa.com/wp-json/wp/v2/posts".to_string(),
            limit: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub url: String,
    pub base: String,
    pub code: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            url: "https://api.exchangerate-api.com/v4/latest".to_string(),
            base: "USD".to_string(),
            code: "BDT".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub weather_secs: u64,
    pub news_secs: u64,
    pub currency_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            weather_secs: DEFAULT_REFRESH_SECS,
            news_secs: DEFAULT_REFRESH_SECS,
            currency_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl RefreshConfig {
    pub fn weather(&self) -> Duration {
        non_zero_secs(self.weather_secs)
    }

    pub fn news(&self) -> Duration {
        non_zero_secs(self.news_secs)
    }

    pub fn currency(&self) -> Duration {
        non_zero_secs(self.currency_secs)
    }
}

/// tokio intervals panic on a zero period, so clamp to one second.
fn non_zero_secs(secs: u64) -> Duration {
    Duration::from_secs(secs.max(1))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    pub fn cache_max_age(&self) -> Duration {
        Duration::from_secs(self.cache_max_age_secs)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(WEATHER_API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.weather.api_key = Some(key);
            }
        }
    }
}
