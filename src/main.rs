//! Ultrahuman MCP Server
//!
//! An MCP server for Ultrahuman Partnership API health metrics.

use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::StreamableHttpService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use ultrahuman_mcp::build_info;
use ultrahuman_mcp::config::{Config, Transport};
use ultrahuman_mcp::mcp::UltrahumanService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ultrahuman_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    build_info::print_startup_banner(&config);
    tracing::info!(
        base_url = %config.base_url,
        transport = ?config.transport,
        auth_key_configured = config.auth_key.is_some(),
        default_email_configured = config.default_email.is_some(),
        "Configuration loaded"
    );
    if config.auth_key.is_none() {
        tracing::warn!("ULTRAHUMAN_AUTH_KEY is not set; metrics tools will fail until it is configured");
    }

    let service = UltrahumanService::new(&config)?;

    match config.transport {
        Transport::Stdio => serve_stdio(service).await,
        Transport::Http => serve_http(service, &config).await,
    }
}

async fn serve_stdio(service: UltrahumanService) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Starting MCP server on stdio...");

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}

async fn serve_http(service: UltrahumanService, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mcp_service = StreamableHttpService::new(
        move || Ok(service.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", mcp_service);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("MCP server listening at http://{}/mcp", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    Ok(())
}
