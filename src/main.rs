use axum::routing::{get, post};
use axum::Router;
use card_gateway::bank::client::BankClient;
use card_gateway::config::AppConfig;
use card_gateway::repo::payments_repo::PaymentsRepo;
use card_gateway::service::payment_service::PaymentService;
use card_gateway::AppState;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let bank = Arc::new(BankClient::new(
        cfg.bank_base_url.clone(),
        cfg.bank_timeout_ms,
        reqwest::Client::new(),
    ));

    let payment_service = PaymentService {
        payments_repo: PaymentsRepo::new(),
        bank,
        clock: chrono::Utc::now,
    };

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown signal received");
                shutdown.cancel();
            }
        });
    }

    let state = AppState {
        payment_service,
        shutdown: shutdown.clone(),
    };

    let app = Router::new()
        .route("/health", get(card_gateway::http::handlers::payments::health))
        .route(
            "/api/payments/process",
            post(card_gateway::http::handlers::payments::process_payment),
        )
        .route(
            "/api/payments/:payment_id",
            get(card_gateway::http::handlers::payments::get_payment),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;
    Ok(())
}
