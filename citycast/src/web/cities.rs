// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::html::layout;
use config::UiConfig;

/// Search-as-you-type city table. Searching, sorting and row activation live in `cities.js`,
/// which reads its page size and debounce interval from the `data-` attributes below.
pub fn render_page(ui: &UiConfig) -> String {
  let body = format!(
    r#"<main class="cities" data-page-size="{}" data-debounce-ms="{}">
  <input id="search" type="search" placeholder="Search for a city..." autocomplete="off" autofocus>
  <h1>Click the headers (City, Country, Timezone) to sort the data.</h1>
  <div id="status" role="status"></div>
  <table id="cities">
    <thead>
      <tr>
        <th data-key="name">City</th>
        <th data-key="country">Country</th>
        <th data-key="timezone">Timezone</th>
      </tr>
    </thead>
    <tbody></tbody>
  </table>
</main>
<script src="/assets/cities.js" defer></script>"#,
    ui.page_size, ui.debounce_ms
  );

  layout("Cities", &body)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_carries_search_settings() {
    let page = render_page(&UiConfig {
      page_size: 25,
      debounce_ms: 300,
      reveal_window: 6,
    });

    assert!(page.contains(r#"data-page-size="25""#));
    assert!(page.contains(r#"data-debounce-ms="300""#));
    assert!(page.contains(r#"<script src="/assets/cities.js" defer></script>"#));
  }
}
