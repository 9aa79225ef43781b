use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRates {
    #[serde(default)]
    pub base: Option<String>,
    pub rates: HashMap<String, f64>,
}

impl ExchangeRates {
    /// Pick the rate for one currency code. A missing code is an invalid response.
    pub fn rate_for(&self, code: &str) -> Result<f64, ApiError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| ApiError::InvalidResponse(format!("no rate for {}", code)))
    }
}
