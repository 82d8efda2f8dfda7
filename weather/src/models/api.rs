// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CurrentResponse {
  pub weather: Vec<Condition>,
  pub main: MainWeather,
  pub wind: Wind,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Condition {
  pub description: String,
  #[serde(default)]
  pub icon: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MainWeather {
  pub temp: f64,
  pub humidity: f64,
  pub pressure: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Wind {
  pub speed: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastResponse {
  #[serde(default)]
  pub list: Vec<ForecastEntry>,
}

/// One 3-hour slot of the 5 day forecast.
#[derive(Debug, Deserialize, Clone)]
pub struct ForecastEntry {
  pub dt_txt: String,
  pub main: ForecastMain,
  #[serde(default)]
  pub weather: Vec<Condition>,
  #[serde(default)]
  pub pop: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastMain {
  pub temp_max: f64,
  pub temp_min: f64,
}
