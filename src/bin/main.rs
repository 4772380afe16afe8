use std::{str::FromStr, sync::Arc};

use catalog_rest_api::{core::db::init_pool, init_openapi_route, settings::get_config, AppState};
use poem::listener::TcpListener;
use tracing::Level;

#[tokio::main]
async fn main() {
    let config = get_config().expect("failed to load config from environment");
    let log_level = config
        .log_level
        .as_deref()
        .and_then(|val| Level::from_str(val).ok())
        .unwrap_or(Level::DEBUG);

    // Logging to File
    let file_appender = tracing_appender::rolling::daily("./logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .init();

    // Logging to Console
    // tracing_subscriber::fmt().with_max_level(log_level).init();

    tracing::info!("run with config: {:?}", config);

    // Init Database Connection
    tracing::info!("Init Postgres connection");
    let pool = init_pool(&config)
        .await
        .expect("failed to connect to postgres");
    // Init App State
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await
    .expect("server stopped with an error")
}
