use augur::{Gateway, Session};
use augur_demos::common::get_backend;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,augur=debug,augur_core=debug,augur_http=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Backend (mock in CI when AUGUR_DEMOS_USE_MOCK is set) behind a session
    let session = Session::new(Gateway::new(get_backend()?));

    // One successful cycle
    let chart = session.submit("AAPL", "2024-04-01", "2024-04-08").await?;
    tracing::info!(rows = chart.len(), anchor = ?chart.anchor_index(), "chart ready");

    // A rejected input never reaches the backend but still shows up in the logs
    let _ = session.submit("AAPL", "2024-04-08", "2024-04-01").await;

    Ok(())
}
