use entity::store::Store;
use irconnect::server::{self, config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::session_layer();
    let store = Store::new();

    let router = server::router::routes()
        .with_state(AppState { store })
        .layer(session);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap();

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, router).await.unwrap();
}
