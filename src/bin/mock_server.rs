//! bankmock server binary
//!
//! Serves the HTTP and gRPC mocks side by side until Ctrl+C / SIGTERM.

use bankmock::api::{self, MockServices};
use bankmock::config::{MockServerConfig, ServerAddress};
use bankmock::telemetry::Telemetry;
use bankmock::Error;

use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

/// Scenario-driven HTTP + gRPC mock server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTTP bind address (overrides MOCK_HTTP_SERVER_ADDRESS)
    #[arg(long)]
    http_address: Option<IpAddr>,

    /// HTTP port (overrides MOCK_HTTP_SERVER_PORT)
    #[arg(long)]
    http_port: Option<u16>,

    /// gRPC bind address (overrides MOCK_GRPC_SERVER_ADDRESS)
    #[arg(long)]
    grpc_address: Option<IpAddr>,

    /// gRPC port (overrides MOCK_GRPC_SERVER_PORT)
    #[arg(long)]
    grpc_port: Option<u16>,

    /// HTTP fixtures root (overrides MOCK_HTTP_FIXTURES_ROOT)
    #[arg(long)]
    http_fixtures: Option<PathBuf>,

    /// gRPC fixtures root (overrides MOCK_GRPC_FIXTURES_ROOT)
    #[arg(long)]
    grpc_fixtures: Option<PathBuf>,

    /// Validate every fixture against its contract and exit
    #[arg(long)]
    check_fixtures: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn apply(&self, mut config: MockServerConfig) -> MockServerConfig {
        config.http = ServerAddress::new(
            self.http_address.unwrap_or(config.http.address),
            self.http_port.unwrap_or(config.http.port),
        );
        config.grpc = ServerAddress::new(
            self.grpc_address.unwrap_or(config.grpc.address),
            self.grpc_port.unwrap_or(config.grpc.port),
        );
        if let Some(root) = &self.http_fixtures {
            config.http_fixtures_root = root.clone();
        }
        if let Some(root) = &self.grpc_fixtures {
            config.grpc_fixtures_root = root.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let _telemetry = Telemetry::init_for_component("bankmock-server", &args.log_level)?;

    let config = args.apply(MockServerConfig::from_env()?);
    let services = MockServices::from_config(&config);

    if args.check_fixtures {
        return match services.verify_fixtures().await {
            Ok(()) => {
                info!("All fixtures conform to their contracts");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                error!(error = %e, "Fixture check failed");
                Ok(ExitCode::FAILURE)
            }
        };
    }

    info!("Starting bankmock server");

    let router = api::build_http_router(services.http.clone());
    let listener = TcpListener::bind(config.http.socket_addr()).await?;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let http_shutdown = shutdown_rx.clone();
    let grpc_shutdown = shutdown_rx.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    info!(
        http = %config.http.url(),
        grpc = %config.grpc.url(),
        "Mock servers ready"
    );

    let http_server = async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(wait_for_shutdown(http_shutdown))
            .await
            .map_err(|e| Error::Internal(format!("HTTP server error: {e}")))
    };
    let grpc_server =
        api::grpc::run_mock_grpc_server(config.grpc.socket_addr(), &services.grpc, grpc_shutdown);
    tokio::try_join!(http_server, grpc_server)?;

    info!("Mock servers shutting down");

    Ok(ExitCode::SUCCESS)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    if *shutdown.borrow() {
        return;
    }
    let _ = shutdown.changed().await;
}
