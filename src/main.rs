use chrono::Local;
use journey_tracker::quotes::QuoteClient;
use journey_tracker::streak::reconcile;
use journey_tracker::{AppState, Store, resolve_data_dir, router};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;
    let store = Store::new(&data_dir);

    let today = Local::now().date_naive();
    let (record, transition) = reconcile(store.load_journey().await, today);
    info!("startup reconcile: {transition:?}, streak {}", record.streak);
    if transition.mutated() {
        if let Err(err) = store.save_journey(&record).await {
            error!("failed to persist journey: {err}");
        }
    }

    let state = AppState::new(store, record, QuoteClient::from_env());
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
