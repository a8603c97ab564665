use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use en_booster::{config, handlers, store};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "en_booster=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_path = config::load_database_path();
  let pool = store::init_store(&db_path).expect("Failed to initialize store");

  {
    let conn = pool.lock().expect("Store lock failed during startup");
    store::seed_default_categories(&conn).expect("Failed to seed categories");
  }

  let app = handlers::router(pool);

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::SERVER_PORT);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
