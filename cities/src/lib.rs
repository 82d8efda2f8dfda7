// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod models;

pub use client::{CityClient, CityProvider};
pub use models::City;

pub mod constants {
  pub(crate) const USER_AGENT: &str = concat!("citycast/", env!("CARGO_PKG_VERSION"));
  pub(crate) const SORT_FIELD: &str = "name";
  pub(crate) const COUNTRY_FACET: &str = "cou_name_en";
  pub(crate) const PLACE_FILTER: &str = "feature_code:\"PPL\"";
  /// Largest page the records endpoint accepts.
  pub const MAX_PROVIDER_LIMIT: u32 = 100;
}
