use async_trait::async_trait;
use log::info;
use reqwest::Client as HttpClient;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;

/// AMap weather web service endpoint.
/// https://lbs.amap.com/api/webservice/guide/api/weatherinfo
const DEFAULT_BASE_URL: &str = "https://restapi.amap.com/v3/weather/weatherInfo";

/// Seam over the weather provider so the city resolver can be tested without
/// network access.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Returns the provider's response for `city` as raw JSON text. The body
    /// is passed through opaque; callers do not inspect it.
    async fn query_city_weather(&self, city: &str) -> Result<String, Box<dyn StdError + Send + Sync>>;
}

pub struct WeatherClient {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            http: HttpClient::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl WeatherLookup for WeatherClient {
    async fn query_city_weather(&self, city: &str) -> Result<String, Box<dyn StdError + Send + Sync>> {
        info!("Weather lookup for city: {}", city);

        let params = [
            ("key", self.api_key.as_str()),
            ("output", "json"),
            ("extensions", "all"),
            ("city", city),
        ];

        // No retry or timeout override; transport failures propagate as-is.
        let weather_data = self.http.get(&self.base_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<JsonValue>()
            .await?;

        Ok(weather_data.to_string())
    }
}
