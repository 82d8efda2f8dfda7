// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  constants::*,
  forecast::daily_from_entries,
  models::{
    api::{CurrentResponse, ForecastResponse},
    weather::{CurrentWeather, ForecastDay, WeatherResult},
  },
};
use async_trait::async_trait;
use config::{HttpConfig, WeatherConfig};
use error::{DependencyError, Error};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
  async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, Error>;

  async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastDay>, Error>;

  /// Current conditions and daily forecast, requested concurrently.
  /// Fails as a whole if either half fails.
  async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, Error> {
    let (current, forecast) =
      tokio::try_join!(self.fetch_current(city), self.fetch_forecast(city))?;
    Ok(WeatherResult { current, forecast })
  }
}

pub struct WeatherClient {
  config: WeatherConfig,
  client: reqwest::Client,
}

impl WeatherClient {
  pub fn new(config: &WeatherConfig, http: &HttpConfig) -> Result<Self, Error> {
    if config.api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }
    Url::parse(&config.base_url)
      .map_err(|e| Error::ConfigError(format!("Invalid weather API URL: {}", e)))?;

    Ok(Self {
      config: config.clone(),
      client: reqwest::Client::builder()
        .timeout(http.timeout())
        .user_agent(USER_AGENT)
        .build()?,
    })
  }

  fn build_api_url(&self, endpoint: &str, city: &str) -> Result<Url, Error> {
    Url::parse_with_params(
      &format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint),
      &[
        ("q", city),
        ("appid", self.config.api_key.as_str()),
        ("units", UNITS),
      ],
    )
    .map_err(|_| Error::ConfigError("Failed to build weather API URL".into()))
  }

  async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, city: &str) -> Result<T, Error> {
    if city.trim().is_empty() {
      return Err(Error::InvalidCity("City name cannot be empty".into()));
    }

    let url = self.build_api_url(endpoint, city)?;
    // without_url keeps the appid out of error messages
    let response = self.client.get(url).send().await.map_err(|e| {
      let e = e.without_url();
      error!("Weather {} request failed: {}", endpoint, e);
      Error::from(e)
    })?;

    match response.status() {
      reqwest::StatusCode::OK => (),
      reqwest::StatusCode::NOT_FOUND => return Err(Error::CityNotFound(city.to_string())),
      reqwest::StatusCode::UNAUTHORIZED => return Err(DependencyError::Unauthorized.into()),
      reqwest::StatusCode::TOO_MANY_REQUESTS => {
        return Err(DependencyError::RateLimitExceeded.into())
      }
      status => {
        let body = response.text().await.unwrap_or_default();
        error!(
          "Weather {} request failed with status {}: {}",
          endpoint,
          status,
          body.chars().take(200).collect::<String>()
        );
        return Err(Error::api(format!("API request failed: {}", status)));
      }
    }

    // the body read shares the request timeout
    response.json().await.map_err(|e| {
      let e = e.without_url();
      error!("Failed to read {} response: {}", endpoint, e);
      Error::from(e)
    })
  }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
  #[instrument(skip(self))]
  async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, Error> {
    let response: CurrentResponse = self.get_json(CURRENT_ENDPOINT, city).await?;
    CurrentWeather::from_response(response)
  }

  #[instrument(skip(self))]
  async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastDay>, Error> {
    let response: ForecastResponse = self.get_json(FORECAST_ENDPOINT, city).await?;
    let slots = response.list.len();
    let days = daily_from_entries(response.list)?;
    debug!("Aggregated {} forecast slots into {} days", slots, days.len());
    Ok(days)
  }
}
