// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::gateway::Gateway;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject};
use cities::City;
use weather::{ForecastDay, WeatherResult};

pub type CitycastSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "City")]
pub struct CityObject {
  pub id: String,
  pub name: String,
  pub country: String,
  pub timezone: String,
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Weather")]
pub struct WeatherObject {
  pub temperature: f64,
  pub description: String,
  pub humidity: i32,
  pub wind_speed: f64,
  pub pressure: i32,
  pub icon: String,
  pub forecast: Vec<ForecastObject>,
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Forecast")]
pub struct ForecastObject {
  /// `YYYY-MM-DD`
  pub date: String,
  pub temperature_high: f64,
  pub temperature_low: f64,
  pub description: String,
  pub precipitation_chance: f64,
}

impl From<City> for CityObject {
  fn from(city: City) -> Self {
    Self {
      id: city.id,
      name: city.name,
      country: city.country,
      timezone: city.timezone,
    }
  }
}

impl From<ForecastDay> for ForecastObject {
  fn from(day: ForecastDay) -> Self {
    Self {
      date: day.date.format("%Y-%m-%d").to_string(),
      temperature_high: day.temperature_high,
      temperature_low: day.temperature_low,
      description: day.description,
      precipitation_chance: day.precipitation_chance,
    }
  }
}

impl From<WeatherResult> for WeatherObject {
  fn from(result: WeatherResult) -> Self {
    let current = result.current;
    Self {
      temperature: current.temperature,
      description: current.description,
      humidity: current.humidity,
      wind_speed: current.wind_speed,
      pressure: current.pressure,
      icon: current.icon,
      forecast: result.forecast.into_iter().map(ForecastObject::from).collect(),
    }
  }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
  /// Cities matching a free-text search, at most `limit` of them.
  async fn get_cities(
    &self,
    ctx: &Context<'_>,
    search: Option<String>,
    #[graphql(validator(minimum = 0))] limit: Option<i32>,
    #[graphql(validator(minimum = 0))] offset: Option<i32>,
  ) -> async_graphql::Result<Vec<CityObject>> {
    let gateway = ctx.data::<Gateway>()?;
    let cities = gateway
      .get_cities(
        search.as_deref(),
        limit.map(|l| l as u32),
        offset.map(|o| o as u32),
      )
      .await?;
    Ok(cities.into_iter().map(CityObject::from).collect())
  }

  /// Current conditions plus a daily forecast for the named city.
  async fn get_weather(
    &self,
    ctx: &Context<'_>,
    city_name: String,
  ) -> async_graphql::Result<WeatherObject> {
    let gateway = ctx.data::<Gateway>()?;
    let result = gateway.get_weather(&city_name).await?;
    Ok(result.into())
  }
}

pub fn build_schema(gateway: Gateway) -> CitycastSchema {
  Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
    .data(gateway)
    .finish()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::gateway::tests::{gateway, FakeCities, FakeWeather};

  fn schema(cities: FakeCities, weather: FakeWeather) -> CitycastSchema {
    build_schema(gateway(cities, weather).0)
  }

  #[test]
  fn sdl_exposes_both_queries() {
    let sdl = schema(
      FakeCities::default(),
      FakeWeather {
        missing_city: false,
      },
    )
    .sdl();

    assert!(sdl.contains("getCities("));
    assert!(sdl.contains("cityName: String!"));
    assert!(sdl.contains("type Forecast"));
    assert!(sdl.contains("windSpeed: Float!"));
    assert!(sdl.contains("precipitationChance: Float!"));
  }

  #[tokio::test]
  async fn negative_limit_is_rejected() {
    let response = schema(
      FakeCities::default(),
      FakeWeather {
        missing_city: false,
      },
    )
    .execute("{ getCities(search: \"par\", limit: -1) { id } }")
    .await;

    assert!(!response.errors.is_empty());
  }

  #[tokio::test]
  async fn not_found_surfaces_generic_message() {
    let response = schema(
      FakeCities::default(),
      FakeWeather { missing_city: true },
    )
    .execute("{ getWeather(cityName: \"Nowhere12345\") { temperature } }")
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Failed to fetch weather");
  }

  #[tokio::test]
  async fn forecast_dates_are_iso_strings() {
    let response = schema(
      FakeCities::default(),
      FakeWeather {
        missing_city: false,
      },
    )
    .execute("{ getWeather(cityName: \"Paris\") { forecast { date } } }")
    .await;

    let data = response.data.into_json().unwrap();
    assert_eq!(data["getWeather"]["forecast"][0]["date"], "2024-05-01");
    assert_eq!(data["getWeather"]["forecast"][1]["date"], "2024-05-02");
  }
}
