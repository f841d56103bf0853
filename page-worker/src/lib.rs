//! Page Worker - gold chat page host for Cloudflare Workers
//!
//! Serves the HTML shell the `gold-client` wasm package binds to, with
//! the backend location and deployment profile written into `<body>`.
//! The wasm package itself is deployed as static assets under `/pkg`.

mod config;
mod page;

use worker::{Context, Env, Request, Response, Router, console_error, console_log, event};

pub use config::{PageConfig, Profile};

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    console_error_panic_hook::set_once();

    Router::new()
        // Health check
        .get("/health", |_req, ctx| {
            let config = match PageConfig::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };

            Response::from_json(&serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "profile": config.profile.as_str(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        })
        // Page shell
        .get("/", |_req, ctx| match PageConfig::from_env(&ctx.env) {
            Ok(config) => {
                console_log!("Serving page ({} profile, backend {})", config.profile.as_str(), config.api_base);
                Response::from_html(page::page_html(&config))
            }
            Err(e) => {
                console_error!("Config error: {}", e);
                Response::error(format!("Config error: {e}"), 500)
            }
        })
        .run(req, env)
        .await
}
