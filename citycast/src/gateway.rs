// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use cities::{City, CityClient, CityProvider};
use config::Config;
use error::Error;
use std::sync::Arc;
use thiserror::Error as ThisError;
use tracing::{error, instrument};
use weather::{WeatherClient, WeatherProvider, WeatherResult};

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_OFFSET: u32 = 0;

/// What callers of the query layer get to see. Upstream detail stays in the logs.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
  #[error("Failed to fetch cities")]
  Cities,
  #[error("Failed to fetch weather")]
  Weather,
}

#[derive(Clone)]
pub struct Gateway {
  cities: Arc<dyn CityProvider>,
  weather: Arc<dyn WeatherProvider>,
}

impl Gateway {
  pub fn new(cities: Arc<dyn CityProvider>, weather: Arc<dyn WeatherProvider>) -> Self {
    Self { cities, weather }
  }

  pub fn from_config(config: &Config) -> Result<Self, Error> {
    Ok(Self::new(
      Arc::new(CityClient::new(&config.cities, &config.http)?),
      Arc::new(WeatherClient::new(&config.weather, &config.http)?),
    ))
  }

  #[instrument(skip(self))]
  pub async fn get_cities(
    &self,
    search: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
  ) -> Result<Vec<City>, QueryError> {
    self
      .cities
      .search(
        search.unwrap_or_default(),
        limit.unwrap_or(DEFAULT_LIMIT),
        offset.unwrap_or(DEFAULT_OFFSET),
      )
      .await
      .map_err(|e| {
        error!("Error fetching cities: {:?}", e);
        QueryError::Cities
      })
  }

  #[instrument(skip(self))]
  pub async fn get_weather(&self, city_name: &str) -> Result<WeatherResult, QueryError> {
    self.weather.fetch_weather(city_name).await.map_err(|e| {
      error!("Error fetching weather: {:?}", e);
      QueryError::Weather
    })
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use async_trait::async_trait;
  use chrono::NaiveDate;
  use std::sync::Mutex;
  use weather::{CurrentWeather, ForecastDay};

  /// Records the last search and answers from a fixed list.
  #[derive(Default)]
  pub(crate) struct FakeCities {
    pub calls: Mutex<Vec<(String, u32, u32)>>,
    pub fail: bool,
  }

  #[async_trait]
  impl CityProvider for FakeCities {
    async fn search(&self, query: &str, limit: u32, offset: u32) -> Result<Vec<City>, Error> {
      self
        .calls
        .lock()
        .unwrap()
        .push((query.to_string(), limit, offset));
      if self.fail {
        return Err(Error::api("API request failed: 502 Bad Gateway"));
      }
      Ok(vec![City {
        id: "1".into(),
        name: "Paris".into(),
        country: "France".into(),
        timezone: "Europe/Paris".into(),
      }])
    }
  }

  pub(crate) struct FakeWeather {
    pub missing_city: bool,
  }

  #[async_trait]
  impl WeatherProvider for FakeWeather {
    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, Error> {
      if self.missing_city {
        return Err(Error::CityNotFound(city.into()));
      }
      Ok(CurrentWeather {
        temperature: 18.0,
        description: "clear".into(),
        humidity: 60,
        wind_speed: 3.0,
        pressure: 1012,
        icon: "01d".into(),
      })
    }

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastDay>, Error> {
      if self.missing_city {
        return Err(Error::CityNotFound(city.into()));
      }
      Ok(
        (1..=2)
          .map(|day| ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            temperature_high: 20.0,
            temperature_low: 10.0,
            description: "clouds".into(),
            precipitation_chance: 0.2,
          })
          .collect(),
      )
    }
  }

  pub(crate) fn gateway(cities: FakeCities, weather: FakeWeather) -> (Gateway, Arc<FakeCities>) {
    let cities = Arc::new(cities);
    (Gateway::new(cities.clone(), Arc::new(weather)), cities)
  }

  #[tokio::test]
  async fn missing_arguments_fall_back_to_defaults() {
    let (gateway, cities) = gateway(
      FakeCities::default(),
      FakeWeather {
        missing_city: false,
      },
    );

    let found = gateway.get_cities(None, None, None).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(
      cities.calls.lock().unwrap().as_slice(),
      &[(String::new(), DEFAULT_LIMIT, DEFAULT_OFFSET)]
    );
  }

  #[tokio::test]
  async fn arguments_are_passed_through() {
    let (gateway, cities) = gateway(
      FakeCities::default(),
      FakeWeather {
        missing_city: false,
      },
    );

    gateway.get_cities(Some("par"), Some(50), Some(100)).await.unwrap();
    assert_eq!(
      cities.calls.lock().unwrap().as_slice(),
      &[("par".to_string(), 50, 100)]
    );
  }

  #[tokio::test]
  async fn city_failures_become_generic() {
    let (gateway, _) = gateway(
      FakeCities {
        fail: true,
        ..Default::default()
      },
      FakeWeather {
        missing_city: false,
      },
    );

    let err = gateway.get_cities(Some("par"), None, None).await.unwrap_err();
    assert_eq!(err, QueryError::Cities);
    assert_eq!(err.to_string(), "Failed to fetch cities");
  }

  #[tokio::test]
  async fn weather_failures_become_generic() {
    let (gateway, _) = gateway(
      FakeCities::default(),
      FakeWeather { missing_city: true },
    );

    let err = gateway.get_weather("Nowhere12345").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch weather");
  }

  #[tokio::test]
  async fn weather_is_combined() {
    let (gateway, _) = gateway(
      FakeCities::default(),
      FakeWeather {
        missing_city: false,
      },
    );

    let result = gateway.get_weather("Paris").await.unwrap();
    assert_eq!(result.current.temperature, 18.0);
    assert_eq!(result.forecast.len(), 2);
  }
}
