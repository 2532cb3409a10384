use async_trait::async_trait;
use augur::{Gateway, Session};
use augur_core::{
    GatewayError, HistoricalPoint, PredictionBackend, PredictionRequest, PredictionResponse,
};
use chrono::Days;
use std::sync::Arc;

/// A backend that predicts tomorrow looks exactly like today.
struct FlatLineBackend {
    price: f64,
}

#[async_trait]
impl PredictionBackend for FlatLineBackend {
    fn name(&self) -> &'static str {
        "flat-line"
    }

    async fn predict(&self, req: &PredictionRequest) -> Result<PredictionResponse, GatewayError> {
        let start = req.start_date();
        let historical_data = (1..=3u64)
            .rev()
            .filter_map(|back| start.checked_sub_days(Days::new(back)))
            .map(|date| HistoricalPoint::new(date, self.price))
            .collect();
        let predicted_data = vec![self.price; req.day_count() as usize];
        Ok(PredictionResponse::new(historical_data, predicted_data, 1.0))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Any PredictionBackend can sit behind the gateway.
    let backend = Arc::new(FlatLineBackend { price: 42.0 });
    let session = Session::new(Gateway::new(backend));

    let chart = session.submit("FLAT", "2024-04-01", "2024-04-04").await?;
    for row in chart.points() {
        println!("{} {:?} {:?}", row.date, row.actual, row.predicted);
    }
    Ok(())
}
