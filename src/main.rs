//! Monastery360 web server

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monastery360_web::{app, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monastery360_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();
    tracing::info!(
        "Payment timing: processing {:?}, success hold {:?}",
        config.payment_timing.processing,
        config.payment_timing.success_hold
    );

    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Monastery360 listening on {}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
