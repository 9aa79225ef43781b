use serde::{Deserialize, Serialize};

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default)]
    pub name: Option<String>,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
}

impl Weather {
    pub fn validate(self) -> Result<Self, ApiError> {
        if self.weather.is_empty() {
            return Err(ApiError::InvalidResponse(
                "weather response has no conditions".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|c| c.description.as_str())
    }
}
