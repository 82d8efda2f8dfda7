// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::CurrentResponse;
use chrono::NaiveDate;
use error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
  /// °C
  pub temperature: f64,
  pub description: String,
  /// %
  pub humidity: i32,
  /// m/s
  pub wind_speed: f64,
  /// hPa
  pub pressure: i32,
  pub icon: String,
}

/// Summary of every forecast slot that falls on `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
  pub date: NaiveDate,
  pub temperature_high: f64,
  pub temperature_low: f64,
  pub description: String,
  /// 0.0 ..= 1.0
  pub precipitation_chance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
  pub current: CurrentWeather,
  pub forecast: Vec<ForecastDay>,
}

impl CurrentWeather {
  pub(crate) fn from_response(response: CurrentResponse) -> Result<Self, Error> {
    let condition = response
      .weather
      .into_iter()
      .next()
      .ok_or_else(|| Error::parse("No weather data available"))?;

    Ok(Self {
      temperature: response.main.temp,
      description: condition.description,
      humidity: response.main.humidity.round() as i32,
      wind_speed: response.wind.speed,
      pressure: response.main.pressure.round() as i32,
      icon: condition.icon,
    })
  }
}
