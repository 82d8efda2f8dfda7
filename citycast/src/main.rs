// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use citycast::{build_schema, routes, Gateway};
use config::Config;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

pub struct ServiceRunner {
  config: Config,
  gateway: Gateway,
}

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  config::dotenv::load()?;
  setup_logging();

  let config = Config::load().context("Failed to load configuration")?;
  ServiceRunner::new(config)?.run().await
}

impl ServiceRunner {
  #[instrument(skip(config))]
  pub fn new(config: Config) -> Result<Self> {
    let gateway = Gateway::from_config(&config).context("Failed to build upstream clients")?;
    Ok(Self { config, gateway })
  }

  #[instrument(skip(self))]
  pub async fn run(self) -> Result<()> {
    let addr = self.config.server.socket_addr()?;
    let schema = build_schema(self.gateway.clone());
    let filter = routes(schema, self.gateway, &self.config.ui);

    let (addr, server) = warp::serve(filter)
      .try_bind_with_graceful_shutdown(addr, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
          warn!("Failed to listen for shutdown signal: {e:?}");
          std::future::pending::<()>().await;
        }
      })
      .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server ready at http://{}/graphql", addr);
    server.await;
    info!("Server stopped");

    Ok(())
  }
}
