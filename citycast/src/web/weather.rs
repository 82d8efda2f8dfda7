// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::html::{escape, layout};
use crate::gateway::QueryError;
use std::fmt::Write;
use std::time::Duration;
use weather::{CurrentWeather, ForecastDay, WeatherResult};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";
const REVEAL_STEP: Duration = Duration::from_millis(100);

/// Animation delay of the card at `index`, if it is among the last `window` of `len` cards.
///
/// The first animated card starts immediately, each following one a step later.
pub fn reveal_delay(index: usize, len: usize, window: usize) -> Option<Duration> {
  let first_animated = len.saturating_sub(window);
  if index >= len || index < first_animated {
    return None;
  }
  Some(REVEAL_STEP * (index - first_animated) as u32)
}

pub fn render_page(
  city_name: &str,
  result: &Result<WeatherResult, QueryError>,
  reveal_window: usize,
) -> String {
  let body = match result {
    Ok(weather) => format!(
      "<main class=\"weather\">\n{}\n<h3>Forecast</h3>\n<div class=\"forecast\">\n{}</div>\n</main>",
      current_card(city_name, &weather.current),
      forecast_cards(&weather.forecast, reveal_window)
    ),
    Err(_) => "<main class=\"weather\">\n<p class=\"error\">Error loading weather data</p>\n</main>"
      .to_string(),
  };

  layout(&format!("Weather in {}", city_name), &body)
}

fn current_card(city_name: &str, current: &CurrentWeather) -> String {
  let description = escape(&current.description);
  format!(
    r#"<section class="weather-card">
  <h2>{}</h2>
  <p class="description">{}</p>
  <img src="{}/{}.png" alt="{}">
  <p>Temperature: {}°C</p>
  <p>Humidity: {}%</p>
  <p>Wind Speed: {} m/s</p>
  <p>Pressure: {} hPa</p>
</section>"#,
    escape(city_name),
    description,
    ICON_BASE_URL,
    escape(&current.icon),
    description,
    current.temperature,
    current.humidity,
    current.wind_speed,
    current.pressure
  )
}

fn forecast_cards(days: &[ForecastDay], reveal_window: usize) -> String {
  let mut out = String::new();
  for (index, day) in days.iter().enumerate() {
    let reveal = match reveal_delay(index, days.len(), reveal_window) {
      Some(delay) => format!(
        " reveal\" style=\"animation-delay: {}ms",
        delay.as_millis()
      ),
      None => String::new(),
    };

    // writing into a String cannot fail
    let _ = writeln!(
      out,
      r#"<article class="forecast-card{}">
  <h4>{}</h4>
  <p>High: {}°C</p>
  <p>Low: {}°C</p>
  <p>{}</p>
  <p>Precipitation Chance: {}%</p>
</article>"#,
      reveal,
      day.date.format("%Y-%m-%d"),
      day.temperature_high,
      day.temperature_low,
      escape(&day.description),
      (day.precipitation_chance * 100.0).round()
    );
  }
  out
}
