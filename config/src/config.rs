// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::*;
use error::Error;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::instrument;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub server: ServerConfig,
  pub cities: CitiesConfig,
  pub weather: WeatherConfig,
  pub http: HttpConfig,
  pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CitiesConfig {
  pub base_url: String,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
  pub base_url: String,
  pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
  pub timeout_secs: u64,
}

/// Knobs of the browser-facing pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
  /// Rows requested per city search.
  pub page_size: u32,
  /// Quiet period after the last keystroke before a search fires.
  pub debounce_ms: u64,
  /// How many of the latest forecast cards get the reveal animation.
  pub reveal_window: usize,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.into(),
      port: DEFAULT_PORT,
    }
  }
}

impl Default for CitiesConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_CITY_API_URL.into(),
    }
  }
}

impl Default for WeatherConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_WEATHER_API_URL.into(),
      api_key: String::new(),
    }
  }
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      page_size: DEFAULT_PAGE_SIZE,
      debounce_ms: DEFAULT_DEBOUNCE_MS,
      reveal_window: DEFAULT_REVEAL_WINDOW,
    }
  }
}

impl fmt::Debug for WeatherConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WeatherConfig")
      .field("base_url", &self.base_url)
      .field("api_key", &"<redacted>")
      .finish()
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content).map_err(|e| Error::ConfigError(e.to_string()))?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Defaults, then the TOML file, then the process environment.
  pub fn load() -> Result<Self, Error> {
    let mut config = Self::from_optional_file(std::env::var(CONFIG_PATH_VAR).ok())?;
    config.apply_env(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
  }

  /// An explicitly named file must exist; the implicit `citycast.toml` may be absent.
  fn from_optional_file(explicit: Option<String>) -> Result<Self, Error> {
    match explicit {
      Some(path) if Path::new(&path).exists() => Self::from_file(&path),
      Some(path) => Err(Error::PathNotFound(PathBuf::from(path))),
      None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
      None => {
        tracing::debug!("No config file at {}, using defaults", DEFAULT_CONFIG_FILE);
        Ok(Self::default())
      }
    }
  }

  pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), Error>
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(host) = lookup(HOST_VAR) {
      self.server.host = host;
    }
    if let Some(port) = lookup(PORT_VAR) {
      self.server.port = parse_var(PORT_VAR, &port)?;
    }
    if let Some(url) = lookup(CITY_API_URL_VAR) {
      self.cities.base_url = url;
    }
    if let Some(url) = lookup(WEATHER_API_URL_VAR) {
      self.weather.base_url = url;
    }
    if let Some(key) = lookup(WEATHER_API_KEY_VAR) {
      self.weather.api_key = key;
    }
    if let Some(secs) = lookup(TIMEOUT_VAR) {
      self.http.timeout_secs = parse_var(TIMEOUT_VAR, &secs)?;
    }
    if let Some(size) = lookup(PAGE_SIZE_VAR) {
      self.ui.page_size = parse_var(PAGE_SIZE_VAR, &size)?;
    }
    if let Some(ms) = lookup(DEBOUNCE_VAR) {
      self.ui.debounce_ms = parse_var(DEBOUNCE_VAR, &ms)?;
    }
    if let Some(window) = lookup(REVEAL_WINDOW_VAR) {
      self.ui.reveal_window = parse_var(REVEAL_WINDOW_VAR, &window)?;
    }
    Ok(())
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.weather.api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }
    if self.http.timeout_secs == 0 {
      return Err(Error::ConfigError("http.timeout_secs must be positive".into()));
    }
    if self.ui.page_size == 0 {
      return Err(Error::ConfigError("ui.page_size must be positive".into()));
    }
    Ok(())
  }
}

impl ServerConfig {
  pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
    let ip: IpAddr = self
      .host
      .parse()
      .map_err(|_| Error::ConfigError(format!("Invalid host address: {}", self.host)))?;
    Ok(SocketAddr::new(ip, self.port))
  }
}

impl HttpConfig {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, Error> {
  value
    .trim()
    .parse()
    .map_err(|_| Error::ConfigError(format!("{} has an invalid value: {:?}", key, value)))
}
