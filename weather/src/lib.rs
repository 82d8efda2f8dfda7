// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod forecast;
pub mod models;
pub mod service;

pub use forecast::{aggregate_daily, ForecastSlot};
pub use models::weather::{CurrentWeather, ForecastDay, WeatherResult};
pub use service::{WeatherClient, WeatherProvider};

pub mod constants {
  pub(crate) const USER_AGENT: &str = concat!("citycast/", env!("CARGO_PKG_VERSION"));
  pub(crate) const CURRENT_ENDPOINT: &str = "weather";
  pub(crate) const FORECAST_ENDPOINT: &str = "forecast";
  pub(crate) const UNITS: &str = "metric";
  pub(crate) const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}
