use augur::{Gateway, Session};
use augur_demos::common::get_backend;

fn show(session: &Session) {
    let view = session.view();
    println!(
        "  phase={:?} submit_enabled={} rows={} error={:?}",
        view.phase,
        view.submit_enabled,
        view.chart.as_ref().map_or(0, |c| c.len()),
        view.error_message
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::new(Gateway::new(get_backend()?));
    println!("Fresh session:");
    show(&session);

    // Success: a chart is rendered.
    println!("Submitting MSFT...");
    if let Err(e) = session.submit("MSFT", "2024-04-01", "2024-04-05").await {
        println!("  failed: {}", e.user_message());
    }
    show(&session);

    // Invalid input: rejected up front, the chart above stays.
    println!("Submitting an empty symbol...");
    if let Err(e) = session.submit("", "2024-04-01", "2024-04-05").await {
        println!("  rejected: {e}");
    }
    show(&session);

    // Domain error: the service answers but knows nothing about the symbol.
    println!("Submitting an unknown symbol...");
    if let Err(e) = session.submit("NOSUCHSYMBOL", "2024-04-01", "2024-04-05").await {
        println!("  failed: {}", e.user_message());
    }
    show(&session);

    // Recovery: the next submission starts over.
    println!("Submitting GOOG...");
    if let Err(e) = session.submit("GOOG", "2024-04-01", "2024-04-03").await {
        println!("  failed: {}", e.user_message());
    }
    show(&session);

    Ok(())
}
