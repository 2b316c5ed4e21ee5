//! OpenWeatherMap API client

use std::time::Duration;

use reqwest::StatusCode;

use crate::state::WeatherResult;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Everything that can go wrong during a lookup. The UI collapses all of
/// these into a single "city not found" message; the detail is logged.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather provider returned {0}")]
    Status(StatusCode),
    #[error("malformed weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the current-conditions endpoint
#[derive(Clone, Debug)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Request URL for a city, in metric units
    pub fn current_weather_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key)
        )
    }

    /// Fetch current conditions for a city
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherResult, ApiError> {
        let response = self.client.get(self.current_weather_url(city)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_city_and_strips_slash() {
        let client = WeatherClient::new("http://localhost:8080/", "k3y", None).unwrap();
        assert_eq!(
            client.current_weather_url("São Paulo"),
            "http://localhost:8080/data/2.5/weather?q=S%C3%A3o%20Paulo&appid=k3y&units=metric"
        );
    }
}
