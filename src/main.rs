mod config;
mod dto;
mod handler;
mod sender;
mod service;

use tower_http::trace::TraceLayer;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt().init();

    // Load config
    let cfg = config::load_config().expect("failed to locate or load config");
    tracing::info!("Successfully loaded email gateway config");

    // Setup SMTP sender and gateway
    let smtp = sender::SmtpEmailSender::new(&cfg).expect("failed to initialize SMTP sender");
    let gateway = service::EmailGateway::new(Arc::new(smtp));
    let gateway_ptr = Arc::new(gateway);

    // Setup router
    let router = handler::router(gateway_ptr).layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().unwrap();

    tracing::info!("Email gateway starting, listening on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
