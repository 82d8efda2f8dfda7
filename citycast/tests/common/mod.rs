// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
#![allow(dead_code)]

use citycast::Gateway;
use config::Config;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Both upstreams served by one mock server: cities under `/records`, weather under `/data/2.5`.
pub fn config_for(server: &MockServer) -> Config {
  let mut config = Config::default();
  config.cities.base_url = format!("{}/records", server.uri());
  config.weather.base_url = format!("{}/data/2.5", server.uri());
  config.weather.api_key = "test-key".into();
  config
}

pub fn gateway_for(server: &MockServer) -> Gateway {
  Gateway::from_config(&config_for(server)).unwrap()
}

pub async fn mount_paris(server: &MockServer) {
  Mock::given(method("GET"))
    .and(path("/records"))
    .and(query_param("q", "par"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "total_count": 1,
      "results": [{
        "geoname_id": "1",
        "name": "Paris",
        "cou_name_en": "France",
        "timezone": "Europe/Paris"
      }]
    })))
    .mount(server)
    .await;

  Mock::given(method("GET"))
    .and(path("/data/2.5/weather"))
    .and(query_param("q", "Paris"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "name": "Paris",
      "main": { "temp": 18, "humidity": 60, "pressure": 1012 },
      "weather": [{ "description": "clear", "icon": "01d" }],
      "wind": { "speed": 3 }
    })))
    .mount(server)
    .await;

  Mock::given(method("GET"))
    .and(path("/data/2.5/forecast"))
    .and(query_param("q", "Paris"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "list": [
        {
          "dt_txt": "2024-05-01 12:00:00",
          "main": { "temp_max": 21.0, "temp_min": 14.0 },
          "weather": [{ "description": "clear sky" }],
          "pop": 0.0
        },
        {
          "dt_txt": "2024-05-02 12:00:00",
          "main": { "temp_max": 19.0, "temp_min": 12.0 },
          "weather": [{ "description": "rain" }],
          "pop": 0.8
        }
      ]
    })))
    .mount(server)
    .await;
}

/// Anything not mounted explicitly answers like OpenWeather does for an unknown city.
pub async fn mount_not_found(server: &MockServer) {
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
      "cod": "404",
      "message": "city not found"
    })))
    .with_priority(u8::MAX)
    .mount(server)
    .await;
}
