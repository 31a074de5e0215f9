use anyhow::Context;
use std::net::TcpListener;
use user_service::banner;
use user_service::configuration::get_configuration;
use user_service::startup::run;
use user_service::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("user-service".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;

    let address = settings.application.address();
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to listen on {}", address))?;

    banner::print_banner();
    banner::print_startup_info(&address);
    tracing::info!("gRPC server is running on {}", address);

    run(listener, settings, shutdown_signal())
        .await?
        .await
        .context("failed to serve")?;

    tracing::info!("gRPC server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
