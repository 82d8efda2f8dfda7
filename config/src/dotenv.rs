// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Once;

pub(in crate::dotenv) static INIT: Once = Once::new();
pub(in crate::dotenv) static DEFAULT_FILENAME: &str = ".env";

#[derive(Debug, Default)]
pub struct Dotenv {
  vars: HashMap<String, String>,
}

impl Dotenv {
  pub fn new() -> Self {
    Self {
      vars: HashMap::new(),
    }
  }

  /// Reads `KEY=value` pairs from a `.env` file.
  ///
  /// Blank lines and `#` comments are skipped, surrounding quotes are stripped.
  /// `None` means `.env` in the working directory.
  pub fn load_from_file<P: AsRef<Path>>(&mut self, filename: Option<P>) -> Result<(), Error> {
    let path = filename.map_or_else(
      || PathBuf::from(DEFAULT_FILENAME),
      |p| p.as_ref().to_path_buf(),
    );

    if !path.exists() {
      return Err(Error::PathNotFound(path));
    }

    let file = File::open(&path)?;
    let reader = BufReader::new(file);

    for (line_num, line) in reader.lines().enumerate() {
      let line = line?;
      let trimmed = line.trim();

      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      match self.parse_line(trimmed) {
        Ok((key, value)) => {
          self.vars.insert(key, value);
        }
        Err(err) => {
          return Err(Error::ConfigError(format!(
            "Error on line {} of {}: {}",
            line_num + 1,
            path.display(),
            err
          )));
        }
      }
    }

    Ok(())
  }

  fn parse_line(&self, line: &str) -> Result<(String, String), String> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let parts: Vec<&str> = line.splitn(2, '=').collect();

    if parts.len() != 2 {
      return Err("Invalid format: missing '='".to_string());
    }

    let key = parts[0].trim();
    let value = parts[1].trim();

    if key.is_empty() {
      return Err("Empty key".to_string());
    }

    let value = value.trim_matches('"').trim_matches('\'').to_string();

    Ok((key.to_string(), value))
  }

  /// Exports the parsed pairs, leaving variables that are already set untouched.
  pub fn set_env_vars(&self) {
    for (key, value) in &self.vars {
      if env::var_os(key).is_none() {
        env::set_var(key, value);
      }
    }
  }

  pub fn get(&self, key: &str) -> Option<&String> {
    self.vars.get(key)
  }
}

/// Loads `.env` once per process. A missing file is not an error.
pub fn load() -> Result<(), Error> {
  let mut result = Ok(());
  INIT.call_once(|| {
    let mut config = Dotenv::new();
    match config.load_from_file::<&str>(None) {
      Ok(()) => {
        config.set_env_vars();
      }
      Err(Error::PathNotFound(path)) => {
        tracing::debug!("No {} file found, skipping", path.display());
      }
      Err(err) => {
        result = Err(err);
      }
    }
  });
  result
}
