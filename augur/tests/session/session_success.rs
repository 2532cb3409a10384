use std::sync::Arc;

use augur::{Gateway, PhaseKind, Session};
use augur_mock::{MockBackend, MockBehavior};

use crate::helpers::{d, dynamic_session, three_plus_two};

#[tokio::test]
async fn success_renders_anchored_chart() {
    let (session, controller) = dynamic_session();
    controller
        .set_behavior("AAPL", MockBehavior::Return(three_plus_two()))
        .await;

    let chart = session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap();

    assert_eq!(
        chart.dates,
        vec![
            d("2024-04-01"),
            d("2024-04-02"),
            d("2024-04-10"),
            d("2024-04-11"),
            d("2024-04-12"),
        ]
    );
    assert_eq!(
        chart.actual,
        vec![Some(100.0), Some(102.0), Some(101.0), None, None]
    );
    assert_eq!(
        chart.predicted,
        vec![None, None, Some(101.0), Some(103.0), Some(104.0)]
    );

    let view = session.view();
    assert_eq!(view.phase, PhaseKind::Success);
    assert!(view.submit_enabled);
    assert_eq!(view.symbol.as_deref(), Some("AAPL"));
    assert_eq!(view.chart.as_ref(), Some(&chart));
    assert_eq!(view.accuracy, Some(0.92));
    assert_eq!(view.error_message, None);
}

#[tokio::test]
async fn request_carries_day_count() {
    let (session, controller) = dynamic_session();
    session
        .submit(" MSFT ", "2024-04-01", "2024-04-11")
        .await
        .unwrap();

    let log = controller.requests().await;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].symbol(), "MSFT");
    assert_eq!(log[0].start_date(), d("2024-04-01"));
    assert_eq!(log[0].day_count(), 10);
}

#[tokio::test]
async fn resubmission_replaces_previous_chart() {
    let session = Arc::new(Session::new(Gateway::new(Arc::new(MockBackend::new()))));
    let first = session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap();
    let second = session
        .submit("TSLA", "2024-05-01", "2024-05-08")
        .await
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(second.len(), 5 + 7);
    assert_eq!(session.chart(), Some(second));
}

#[tokio::test]
async fn view_serializes_for_a_front_end() {
    let (session, _controller) = dynamic_session();
    session
        .submit("GOOG", "2024-04-10", "2024-04-11")
        .await
        .unwrap();
    let v = serde_json::to_value(session.view()).unwrap();
    assert_eq!(v["phase"], "success");
    assert_eq!(v["submit_enabled"], true);
    assert_eq!(v["chart"]["dates"][5], "2024-04-11");
    assert!(v["chart"]["actual"][5].is_null());
}
