// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Deserializer};

/// One city search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
  pub id: String,
  pub name: String,
  pub country: String,
  pub timezone: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
  #[serde(default)]
  pub results: Option<Vec<CityRecord>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CityRecord {
  #[serde(deserialize_with = "id_as_string")]
  pub geoname_id: String,
  pub name: String,
  #[serde(default)]
  pub cou_name_en: Option<String>,
  #[serde(default)]
  pub timezone: Option<String>,
}

impl From<CityRecord> for City {
  fn from(record: CityRecord) -> Self {
    Self {
      id: record.geoname_id,
      name: record.name,
      country: record.cou_name_en.unwrap_or_default(),
      timezone: record.timezone.unwrap_or_default(),
    }
  }
}

// geoname ids come back as strings from some dataset versions and as numbers from others
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum RawId {
    Text(String),
    Number(i64),
  }

  Ok(match RawId::deserialize(deserializer)? {
    RawId::Text(s) => s,
    RawId::Number(n) => n.to_string(),
  })
}
