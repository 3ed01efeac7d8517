use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;
use tracing::info;
use user_api::{telemetry, AppState, Config};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::from_env().wrap_err("invalid configuration")?;
    telemetry::init_tracing(config.environment);

    let listener = TcpListener::bind(config.address)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.address))?;

    info!(app = %config.app_name, address = %config.address, "listening");
    user_api::serve(listener, AppState::from_config(&config)).await?;
    Ok(())
}
