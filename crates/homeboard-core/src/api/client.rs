//! HTTP client for the weather, news and currency providers.
//!
//! Every provider is a plain JSON GET. Failures are returned to the caller
//! as-is; the refresh scheduler decides what a failed cycle means.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{CurrencyConfig, NewsConfig, WeatherConfig};
use crate::models::{ExchangeRates, Post, Weather};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// Shorter than any refresh interval so a hung request never outlives its cycle.
const REQUEST_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("homeboard/", env!("CARGO_PKG_VERSION"));

/// Provider client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== Feed Fetching Methods =====

    /// Fetch current conditions for the configured city
    pub async fn fetch_weather(&self, config: &WeatherConfig) -> Result<Weather> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ApiError::MissingConfig("weather API key"))?;

        let weather: Weather = self
            .get(
                &config.url,
                &[
                    ("q", config.city.as_str()),
                    ("appid", api_key),
                    ("units", config.units.as_str()),
                ],
            )
            .await?;
        let weather = weather.validate()?;

        debug!(city = %config.city, temp = weather.main.temp, "Weather fetched");
        Ok(weather)
    }

    /// Fetch the latest posts
    pub async fn fetch_news(&self, config: &NewsConfig) -> Result<Vec<Post>> {
        let posts: Vec<Post> = self.get(&config.url, &[]).await?;
        debug!(count = posts.len(), "News fetched");
        Ok(posts)
    }

    /// Fetch the exchange rate from the base currency to the configured code
    pub async fn fetch_exchange_rate(&self, config: &CurrencyConfig) -> Result<f64> {
        let url = rates_url(config);
        let rates: ExchangeRates = self.get(&url, &[]).await?;
        let rate = rates.rate_for(&config.code)?;
        debug!(base = %config.base, code = %config.code, rate, "Exchange rate fetched");
        Ok(rate)
    }
}

fn rates_url(config: &CurrencyConfig) -> String {
    format!("{}/{}", config.url.trim_end_matches('/'), config.base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_url() {
        let config = CurrencyConfig::default();
        assert_eq!(
            rates_url(&config),
            "https://api.exchangerate-api.com/v4/latest/USD"
        );

        let trailing = CurrencyConfig {
            url: "http://localhost:9000/latest/".to_string(),
            base: "EUR".to_string(),
            ..CurrencyConfig::default()
        };
        assert_eq!(rates_url(&trailing), "http://localhost:9000/latest/EUR");
    }

    #[tokio::test]
    async fn test_weather_requires_api_key() {
        let client = ApiClient::new().unwrap();
        let err = client
            .fetch_weather(&WeatherConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::MissingConfig(_))
        ));
    }
}
