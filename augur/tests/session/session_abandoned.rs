use std::time::Duration;

use augur::{AugurError, GatewayError, PhaseKind};
use augur_mock::MockBehavior;
use tokio_test::{assert_pending, task};

use crate::helpers::{dynamic_session, three_plus_two};

#[tokio::test]
async fn caller_timeout_does_not_leave_session_loading() {
    let (session, controller) = dynamic_session();
    controller.set_behavior("AAPL", MockBehavior::Hang).await;

    let timed_out = tokio::time::timeout(
        Duration::from_millis(5),
        session.submit("AAPL", "2024-04-10", "2024-04-12"),
    )
    .await;
    assert!(timed_out.is_err());

    assert_eq!(session.phase(), PhaseKind::Failed);
    assert!(session.submit_enabled());
    assert_eq!(
        session.last_error(),
        Some(AugurError::Gateway(GatewayError::network("request abandoned")))
    );

    controller
        .set_behavior("AAPL", MockBehavior::Return(three_plus_two()))
        .await;
    let chart = session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap();
    assert_eq!(chart.len(), 5);
    assert_eq!(controller.call_count().await, 2);
}

#[tokio::test]
async fn dropping_pending_submission_clears_chart_and_reenables_submit() {
    let (session, controller) = dynamic_session();
    controller
        .set_behavior("AAPL", MockBehavior::Return(three_plus_two()))
        .await;
    session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap();

    controller.set_behavior("AAPL", MockBehavior::Hang).await;
    let mut pending = task::spawn(session.submit("AAPL", "2024-04-10", "2024-04-12"));
    assert_pending!(pending.poll());
    assert_eq!(session.phase(), PhaseKind::Loading);
    drop(pending);

    let view = session.view();
    assert_eq!(view.phase, PhaseKind::Failed);
    assert!(view.submit_enabled);
    assert_eq!(view.chart, None);
}
