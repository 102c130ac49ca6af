#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let config = ServerConfig::from_env(leptos_options.site_addr).expect("invalid server configuration");

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.addr, "uora listening");
    axum::serve(listener, app).await.expect("server failed");
}
