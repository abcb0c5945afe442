use std::{
    net::{IpAddr, SocketAddr},
    time::Instant,
};

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

use super::plugin::{DevServerConfig, I18nFlowPlugin, Middleware, merge_dev_config};

/// Everything needed to run the local dev server.
#[derive(Debug, Clone)]
pub struct ServeSettings {
    pub host: IpAddr,
    pub port: u16,
    pub plugin: I18nFlowPlugin,
}

impl ServeSettings {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Middlewares the dev server installs on its own.
pub fn host_config() -> DevServerConfig {
    DevServerConfig::default().with_middleware(Middleware::new("request-log", |router: Router| {
        router.layer(middleware::from_fn(log_request))
    }))
}

/// Build the dev-server router with the plugin's config hook applied.
///
/// Requests nothing claims fall through to a 404.
pub fn build_app(plugin: &I18nFlowPlugin, host: DevServerConfig) -> Router {
    let config = plugin.modify_config(host, merge_dev_config);
    debug!(middlewares = ?config.middleware_names(), "dev server chain");

    config.into_router(Router::new().fallback(not_found))
}

/// Serve until Ctrl-C.
pub fn run_dev_server(settings: ServeSettings) -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let addr = settings.addr();
            let app = build_app(&settings.plugin, host_config());

            let listener = TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind to {}", addr))?;
            info!(
                "{} listening on http://{}{}",
                settings.plugin.name(),
                addr,
                settings.plugin.route()
            );

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("Failed to serve application")?;

            Ok(())
        })
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    debug!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request"
    );
    response
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
