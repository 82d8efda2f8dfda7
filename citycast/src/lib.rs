// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod gateway;
pub mod schema;
pub mod web;

pub use crate::gateway::{Gateway, QueryError};
pub use crate::schema::{build_schema, CitycastSchema};
pub use crate::web::routes;
