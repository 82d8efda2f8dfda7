// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod cities;
pub mod html;
pub mod weather;

use crate::{gateway::Gateway, schema::CitycastSchema};
use async_graphql::http::GraphiQLSource;
use async_graphql_warp::{GraphQLBadRequest, GraphQLResponse};
use config::UiConfig;
use std::convert::Infallible;
use tracing::debug;
use warp::{
  http::StatusCode,
  reply::{self, Reply},
  Filter, Rejection,
};

const CITIES_JS: &str = include_str!("../../assets/cities.js");
const STYLE_CSS: &str = include_str!("../../assets/style.css");

/// Every route the server answers: the GraphQL endpoint, GraphiQL, both pages and their assets.
pub fn routes(
  schema: CitycastSchema,
  gateway: Gateway,
  ui: &UiConfig,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
  let graphql = warp::path("graphql")
    .and(warp::path::end())
    .and(async_graphql_warp::graphql(schema))
    .and_then(
      |(schema, request): (CitycastSchema, async_graphql::Request)| async move {
        Ok::<_, Infallible>(GraphQLResponse::from(schema.execute(request).await))
      },
    );

  let graphiql = warp::path("graphiql")
    .and(warp::path::end())
    .and(warp::get())
    .map(|| reply::html(GraphiQLSource::build().endpoint("/graphql").finish()));

  let index_html = cities::render_page(ui);
  let index = warp::path::end()
    .and(warp::get())
    .map(move || reply::html(index_html.clone()));

  let reveal_window = ui.reveal_window;
  let weather_page = warp::path!("weather" / String)
    .and(warp::get())
    .and(warp::any().map(move || gateway.clone()))
    .and_then(move |raw_name: String, gateway: Gateway| {
      weather_page(raw_name, gateway, reveal_window)
    });

  let assets = warp::path("assets").and(
    warp::path!("cities.js")
      .map(|| reply::with_header(CITIES_JS, "content-type", "application/javascript; charset=utf-8"))
      .or(
        warp::path!("style.css")
          .map(|| reply::with_header(STYLE_CSS, "content-type", "text/css; charset=utf-8")),
      ),
  );

  graphql
    .or(graphiql)
    .or(index)
    .or(weather_page)
    .or(warp::get().and(assets))
    .recover(handle_rejection)
}

async fn weather_page(
  raw_name: String,
  gateway: Gateway,
  reveal_window: usize,
) -> Result<impl Reply, Infallible> {
  let city_name = urlencoding::decode(&raw_name)
    .map(|name| name.into_owned())
    .unwrap_or(raw_name);
  debug!("Rendering weather page for {}", city_name);

  let result = gateway.get_weather(&city_name).await;
  let status = if result.is_ok() {
    StatusCode::OK
  } else {
    StatusCode::BAD_GATEWAY
  };

  Ok(reply::with_status(
    reply::html(weather::render_page(&city_name, &result, reveal_window)),
    status,
  ))
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
  if let Some(GraphQLBadRequest(err)) = err.find() {
    return Ok(reply::with_status(err.to_string(), StatusCode::BAD_REQUEST));
  }
  if err.is_not_found() {
    return Ok(reply::with_status("Not Found".to_string(), StatusCode::NOT_FOUND));
  }
  if err.find::<warp::reject::MethodNotAllowed>().is_some() {
    return Ok(reply::with_status(
      "Method Not Allowed".to_string(),
      StatusCode::METHOD_NOT_ALLOWED,
    ));
  }

  Ok(reply::with_status(
    "Internal Server Error".to_string(),
    StatusCode::INTERNAL_SERVER_ERROR,
  ))
}
