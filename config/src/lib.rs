// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;
pub mod dotenv;

pub use crate::config::{CitiesConfig, Config, HttpConfig, ServerConfig, UiConfig, WeatherConfig};

pub mod constants {
  pub const DEFAULT_HOST: &str = "0.0.0.0";
  pub const DEFAULT_PORT: u16 = 4000;
  pub const DEFAULT_CITY_API_URL: &str = "https://public.opendatasoft.com/api/explore/v2.1/catalog/datasets/geonames-all-cities-with-a-population-1000/records";
  pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";
  pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
  pub const DEFAULT_PAGE_SIZE: u32 = 50;
  pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
  pub const DEFAULT_REVEAL_WINDOW: usize = 6;
  pub const DEFAULT_CONFIG_FILE: &str = "citycast.toml";

  pub const CONFIG_PATH_VAR: &str = "CITYCAST_CONFIG";
  pub const HOST_VAR: &str = "HOST";
  pub const PORT_VAR: &str = "PORT";
  pub const CITY_API_URL_VAR: &str = "CITY_API_URL";
  pub const WEATHER_API_URL_VAR: &str = "WEATHER_API_URL";
  pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";
  pub const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";
  pub const PAGE_SIZE_VAR: &str = "PAGE_SIZE";
  pub const DEBOUNCE_VAR: &str = "SEARCH_DEBOUNCE_MS";
  pub const REVEAL_WINDOW_VAR: &str = "REVEAL_WINDOW";
}
