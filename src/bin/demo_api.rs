//! Demo API server.
//!
//! Wires a few JSON resources together with the combinators and exposes
//! them over HTTP:
//!
//! - `GET /hello` — plain 200 greeting
//! - `POST /things` — 201 via the status tag
//! - `POST /echo` — echoes the request body back as a JSON field

use clap::Parser;
use facet_router::facet::json;
use facet_router::{service_fn, Api, BoxError, Resource, ServerConfig};

use axum::body::Body;
use axum::http::{Method, Request};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MAX_ECHO_BYTES: usize = 64 * 1024;

#[derive(Parser)]
#[command(name = "demo-api", about = "Demo API built on facet-router")]
struct Args {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Port to bind; overrides the config file.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => facet_router::config::load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(port = config.port, "demo-api starting");

    let hello = Resource::named("hello").at_shared(
        Method::GET,
        "/hello",
        service_fn(|_req: Request<Body>| async {
            Ok::<_, BoxError>(json!({"message": "hello"}))
        }),
    );

    let things = Resource::named("things").at_shared(
        Method::POST,
        "/things",
        service_fn(|_req: Request<Body>| async {
            Ok::<_, BoxError>(json!({"status": 201, "message": "created"}))
        }),
    );

    let echo = Resource::named("echo").at_shared(
        Method::POST,
        "/echo",
        service_fn(|req: Request<Body>| async move {
            let bytes = axum::body::to_bytes(req.into_body(), MAX_ECHO_BYTES).await?;
            Ok::<_, BoxError>(json!({"echo": String::from_utf8_lossy(&bytes)}))
        }),
    );

    let api = Api::new(hello.or_else(things).or_else(echo));
    tracing::info!(api = %api.name(), "resources composed");

    api.expose(config.port, |resource| {
        resource.after_that(json::to_http_with_status_from_tag("status"))
    })
    .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
