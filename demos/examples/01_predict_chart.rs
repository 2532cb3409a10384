use augur::{Gateway, merge_series};
use augur_demos::common::get_backend;
use chrono::NaiveDate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create the backend (mock in CI when AUGUR_DEMOS_USE_MOCK is set).
    let backend = get_backend()?;

    // 2. Build the gateway around it.
    let gateway = Gateway::builder().with_backend(backend).build()?;
    println!("Using backend: {}", gateway.backend_name());

    // 3. Ask for a week of predictions starting on April 1st.
    let start = NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("invalid start date")?;
    let end = NaiveDate::from_ymd_opt(2024, 4, 8).ok_or("invalid end date")?;
    let response = gateway.submit_dates("AAPL", start, end).await?;
    if let Some(message) = response.error() {
        println!("Service reported an error: {message}");
        return Ok(());
    }

    // 4. Merge observed and predicted prices into one series.
    let chart = merge_series(&response, start)?;

    // 5. Print it as a table.
    println!("accuracy: {:.2}", response.accuracy);
    println!("{:<12} {:>10} {:>10}", "date", "actual", "predicted");
    let cell = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
    for row in chart.points() {
        println!(
            "{:<12} {:>10} {:>10}",
            row.date.to_string(),
            cell(row.actual),
            cell(row.predicted)
        );
    }

    Ok(())
}
