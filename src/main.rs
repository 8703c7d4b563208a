use anyhow::Result;
use clean_arch::{
    application::services::ApplicationServices,
    config::AppConfig,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
    },
    infrastructure::{
        database,
        repositories::{
            PostgresArticleReadRepository, PostgresArticleWriteRepository,
            PostgresAuthorRepository,
        },
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.debug());
    if config.debug() {
        tracing::debug!(
            server_address = config.server_address(),
            timeout_secs = config.context_timeout().as_secs(),
            "service running in debug mode"
        );
    }

    let pool = database::init_pool(config.database()).await?;
    database::run_migrations(&pool).await?;

    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(PostgresAuthorRepository::new(pool.clone()));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_read_repo),
        Arc::clone(&article_write_repo),
        Arc::clone(&author_repo),
        config.context_timeout(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database pool closed");

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "debug,tower_http=debug,sqlx=info"
    } else {
        "info,tower_http=info,sqlx=warn"
    };
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_filter.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
