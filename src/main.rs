use http_greeter::{build_app, config::Config, errors::StartupError, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env();
    let app = build_app();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .map_err(|source| StartupError::bind(addr, source))?;

    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
