// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  constants::*,
  models::{City, SearchResponse},
};
use async_trait::async_trait;
use config::{CitiesConfig, HttpConfig};
use error::Error;
use tracing::{debug, error, instrument, warn};
use url::Url;

#[async_trait]
pub trait CityProvider: Send + Sync {
  /// Free-text city search. Never returns more than `limit` cities.
  async fn search(&self, query: &str, limit: u32, offset: u32) -> Result<Vec<City>, Error>;
}

#[derive(Debug, Clone)]
pub struct CityClient {
  client: reqwest::Client,
  base_url: String,
}

impl CityClient {
  pub fn new(config: &CitiesConfig, http: &HttpConfig) -> Result<Self, Error> {
    Url::parse(&config.base_url)
      .map_err(|e| Error::ConfigError(format!("Invalid city API URL: {}", e)))?;

    let client = reqwest::Client::builder()
      .timeout(http.timeout())
      .user_agent(USER_AGENT)
      .build()?;

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
    })
  }

  fn build_api_url(&self, query: &str, limit: u32, offset: u32) -> Result<Url, Error> {
    let limit = limit.min(MAX_PROVIDER_LIMIT).to_string();
    let offset = offset.to_string();

    let mut params = vec![
      ("rows", limit.as_str()),
      ("limit", limit.as_str()),
      ("offset", offset.as_str()),
      ("sort", SORT_FIELD),
      ("facet", COUNTRY_FACET),
      ("refine", PLACE_FILTER),
    ];
    let query = query.trim();
    if !query.is_empty() {
      params.push(("q", query));
    }

    Url::parse_with_params(&self.base_url, &params)
      .map_err(|e| Error::ConfigError(format!("Failed to build city API URL: {}", e)))
  }
}

#[async_trait]
impl CityProvider for CityClient {
  #[instrument(skip(self))]
  async fn search(&self, query: &str, limit: u32, offset: u32) -> Result<Vec<City>, Error> {
    let url = self.build_api_url(query, limit, offset)?;
    let response = self.client.get(url).send().await.map_err(|e| {
      error!("City search request failed: {}", e);
      Error::from(e)
    })?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      error!(
        "City search failed with status {}: {}",
        status,
        truncate_body(&body)
      );
      return Err(Error::api(format!("City search failed with status {}", status)));
    }

    let payload: SearchResponse = response.json().await.map_err(|e| {
      error!("Failed to read city search response: {}", e);
      Error::from(e)
    })?;

    let records = payload.results.unwrap_or_default();
    if records.is_empty() {
      warn!("No records found for query {:?}", query);
      return Ok(Vec::new());
    }

    let cities: Vec<City> = records
      .into_iter()
      .take(limit as usize)
      .map(City::from)
      .collect();

    debug!("City search returned {} cities", cities.len());
    Ok(cities)
  }
}

fn truncate_body(body: &str) -> &str {
  const MAX: usize = 200;
  match body.char_indices().nth(MAX) {
    Some((idx, _)) => &body[..idx],
    None => body,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client() -> CityClient {
    let config = CitiesConfig {
      base_url: "https://cities.example/records".into(),
    };
    CityClient::new(&config, &HttpConfig::default()).unwrap()
  }

  #[test]
  fn url_carries_paging_and_filters() {
    let url = client().build_api_url("par", 10, 20).unwrap();
    let pairs: Vec<(String, String)> = url
      .query_pairs()
      .map(|(k, v)| (k.into_owned(), v.into_owned()))
      .collect();

    assert!(pairs.contains(&("q".into(), "par".into())));
    assert!(pairs.contains(&("rows".into(), "10".into())));
    assert!(pairs.contains(&("limit".into(), "10".into())));
    assert!(pairs.contains(&("offset".into(), "20".into())));
    assert!(pairs.contains(&("sort".into(), "name".into())));
    assert!(pairs.contains(&("facet".into(), "cou_name_en".into())));
  }

  #[test]
  fn provider_page_is_capped() {
    let url = client().build_api_url("par", 150, 0).unwrap();
    let limits: Vec<String> = url
      .query_pairs()
      .filter(|(k, _)| k == "limit" || k == "rows")
      .map(|(_, v)| v.into_owned())
      .collect();

    assert_eq!(limits, vec!["100".to_string(), "100".to_string()]);
  }

  #[test]
  fn blank_query_is_omitted() {
    let url = client().build_api_url("   ", 5, 0).unwrap();
    assert!(url.query_pairs().all(|(k, _)| k != "q"));
  }

  #[test]
  fn invalid_base_url_is_rejected() {
    let config = CitiesConfig {
      base_url: "not a url".into(),
    };
    let err = CityClient::new(&config, &HttpConfig::default()).unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
  }

  #[test]
  fn truncate_body_respects_char_boundaries() {
    let body = "é".repeat(300);
    assert_eq!(truncate_body(&body).chars().count(), 200);
    assert_eq!(truncate_body("short"), "short");
  }
}
