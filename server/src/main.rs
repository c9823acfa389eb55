//! SSR host for the Blockchain Insper site.
//!
//! Renders the Leptos app on the server, serves the hydration bundle from
//! `/pkg`, and answers `/healthz`. All content comes from the REST backend;
//! this process holds no state of its own.

#![recursion_limit = "256"]
mod config;
mod routes;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port = config::listen_port(std::env::var(config::PORT_ENV).ok().as_deref())?;
    let app = routes::leptos_app().map_err(ServerError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "blockchain insper site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
