use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use waifu_relay::config::Config;
use waifu_relay::router::{RelayState, relay_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        allow_nsfw = cfg.allow_nsfw,
        credential = if cfg.credential().is_some() { "<set>" } else { "<none>" },
        fallback_image = %cfg.fallback_image_url,
        loglevel = %cfg.loglevel
    );

    let state = RelayState::new(&cfg)?;
    for provider in state.resolver.table().providers() {
        info!(
            provider = %provider.name,
            base_url = %provider.base_url,
            priority = provider.priority,
            "provider registered"
        );
    }
    let app = relay_router(state);

    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
