//! iproov-demo-server

use anyhow::{anyhow, Result};
use axum::Router;
use axum_server::Handle;
use clap::Parser;
use iproov_demo_server::{
    app_state::AppState,
    docs::ApiDoc,
    router,
    settings::{LogFormat, Settings},
};
use std::{
    io,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    process::exit,
    time::Duration,
};
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Serve the iProov demo pages.
#[derive(Debug, Parser)]
#[command(name = "iproov-demo-server", version, about)]
struct Cli {
    /// Settings file to load instead of the bundled `config/settings.toml`.
    #[arg(long, short)]
    config_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (stdout_writer, _stdout_guard) = tracing_appender::non_blocking(io::stdout());

    let settings = Settings::load(cli.config_path)?;

    setup_tracing(stdout_writer, settings.log.format)?;

    info!(
        subject = "app_settings",
        category = "init",
        "starting with settings: {:?}",
        settings,
    );

    let cancellation_token = CancellationToken::new();

    let app_server = tokio::spawn(serve_app(settings, cancellation_token.clone()));

    tokio::spawn(async move {
        capture_sigterm().await;

        cancellation_token.cancel();
        println!("\nCtrl+C received, shutting down. Press Ctrl+C again to force shutdown.");

        capture_sigterm().await;

        exit(130)
    });

    if let Err(e) = app_server.await? {
        error!("app server crashed: {}", e);
        return Err(e);
    }

    Ok(())
}

async fn serve_app(settings: Settings, token: CancellationToken) -> Result<()> {
    let app_state = AppState::new(&settings);

    let router = router::setup_middleware(
        router::setup_app_router(app_state),
        settings.server().timeout(),
    )
    .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    let (server, _) = serve("Application", router, settings.server().port).await?;

    token.cancelled().await;
    server.graceful_shutdown(Some(Duration::from_secs(10)));

    Ok(())
}

async fn serve(name: &str, app: Router, port: u16) -> Result<(Handle, SocketAddr)> {
    let bind_addr: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
    info!(
        subject = "app_start",
        category = "init",
        "{} server listening on {}",
        name,
        bind_addr
    );

    let handle = Handle::new();

    tokio::spawn({
        let handle = handle.clone();
        async move {
            if let Err(e) = axum_server::bind(bind_addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await
            {
                error!(subject = "app_start", category = "init", "bind failed: {}", e);
            }
        }
    });

    let addr = handle
        .listening()
        .await
        .ok_or_else(|| anyhow!("{name} server failed to bind {bind_addr}"))?;

    Ok((handle, addr))
}

/// Captures and waits for system signals.
async fn capture_sigterm() {
    #[cfg(unix)]
    let term = async {
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let term = std::future::pending::<()>();

    tokio::select! {
        _ = signal::ctrl_c() => {},
        _ = term => {}
    };
}

/// Setup the stdout [tracing][tracing] layer in the configured format.
fn setup_tracing(
    writer: tracing_appender::non_blocking::NonBlocking,
    format: LogFormat,
) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iproov_demo_server=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(writer).with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(writer),
            )
            .try_init()?,
    }

    Ok(())
}
