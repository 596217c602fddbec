use answer_share::{configuration, create_app, Configuration};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Error, Debug)]
enum StartupError {
    #[error("Error loading configuration: {0}")]
    Configuration(#[from] configuration::Error),
    #[error("Error binding to {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Error serving requests: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Only used locally, deployments set the variables directly
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("Error loading .env file: {error}");
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "answer_share=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let configuration = Configuration::from_env()?;
    let address = configuration.address;
    tracing::debug!("Sharing through {}", configuration.intent_url);

    let app = create_app(configuration);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    match listener.local_addr() {
        Ok(address) => tracing::info!("listening on http://{address}"),
        Err(error) => tracing::warn!("Could not read listening address: {error}"),
    }

    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)
}
