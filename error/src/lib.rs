// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("City not found: {0}")]
  CityNotFound(String),
  #[error("Dependency error: {0}")]
  Dependency(#[from] DependencyError),
  #[error("Invalid city name: {0}")]
  InvalidCity(String),
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("Path not found: {}", .0.display())]
  PathNotFound(PathBuf),
}

/// Failures of an upstream provider or of the transport in between.
#[derive(ThisError, Debug)]
pub enum DependencyError {
  #[error("API error: {0}")]
  ApiError(String),
  #[error("HTTP error: {0}")]
  HttpError(reqwest::Error),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Timeout error")]
  Timeout,
  #[error("Rate limit exceeded")]
  RateLimitExceeded,
  #[error("Provider rejected the API key")]
  Unauthorized,
}

impl Error {
  pub fn api(message: impl Into<String>) -> Self {
    Self::Dependency(DependencyError::ApiError(message.into()))
  }

  pub fn parse(message: impl Into<String>) -> Self {
    Self::Dependency(DependencyError::ParseError(message.into()))
  }

  pub fn is_dependency(&self) -> bool {
    matches!(self, Self::Dependency(_))
  }

  pub fn is_city_not_found(&self) -> bool {
    matches!(self, Self::CityNotFound(_))
  }
}

impl From<reqwest::Error> for DependencyError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Self::Timeout
    } else if err.is_decode() {
      Self::ParseError(err.to_string())
    } else {
      Self::HttpError(err)
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    Self::Dependency(err.into())
  }
}
