use augur::{AugurError, GENERIC_FAILURE_MESSAGE, GatewayError, MergeError, PhaseKind, PredictionResponse};
use augur_mock::MockBehavior;

use crate::helpers::{dynamic_session, three_plus_two};

#[tokio::test]
async fn domain_error_fails_and_is_shown_verbatim() {
    let (session, controller) = dynamic_session();
    controller
        .set_behavior("ZZZZ", MockBehavior::Return(PredictionResponse::failed("unknown symbol")))
        .await;

    let err = session
        .submit("ZZZZ", "2024-04-10", "2024-04-12")
        .await
        .unwrap_err();
    assert_eq!(err, AugurError::backend("unknown symbol"));

    let view = session.view();
    assert_eq!(view.phase, PhaseKind::Failed);
    assert!(view.submit_enabled);
    assert_eq!(view.chart, None);
    assert_eq!(view.error_message.as_deref(), Some("unknown symbol"));
}

#[tokio::test]
async fn network_failure_clears_prior_chart() {
    let (session, controller) = dynamic_session();
    controller
        .set_behavior("AAPL", MockBehavior::Return(three_plus_two()))
        .await;
    session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap();
    assert!(session.chart().is_some());

    controller
        .set_behavior(
            "AAPL",
            MockBehavior::Fail(GatewayError::network("connection refused")),
        )
        .await;
    let err = session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap_err();

    assert!(matches!(err, AugurError::Gateway(GatewayError::Network(_))));
    assert_eq!(session.phase(), PhaseKind::Failed);
    assert_eq!(session.chart(), None);
    assert_eq!(
        session.view().error_message.as_deref(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn bad_response_is_reported_like_network_failure() {
    let (session, controller) = dynamic_session();
    controller
        .set_behavior("AAPL", MockBehavior::Fail(GatewayError::bad_response("status 500")))
        .await;
    let err = session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap_err();
    assert!(err.clears_chart());
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn empty_history_fails_with_no_data() {
    let (session, controller) = dynamic_session();
    controller
        .set_behavior("AAPL", MockBehavior::Return(PredictionResponse::new(vec![], vec![1.0], 0.5)))
        .await;
    let err = session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap_err();
    assert_eq!(err, AugurError::Merge(MergeError::NoData));
    assert_eq!(session.phase(), PhaseKind::Failed);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_backend() {
    let (session, controller) = dynamic_session();
    controller
        .set_behavior("AAPL", MockBehavior::Return(three_plus_two()))
        .await;
    session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap();

    let reversed = session
        .submit("AAPL", "2024-04-12", "2024-04-10")
        .await
        .unwrap_err();
    let blank = session.submit("", "2024-04-10", "2024-04-12").await.unwrap_err();

    assert!(matches!(reversed, AugurError::Gateway(GatewayError::InvalidRequest(_))));
    assert!(matches!(blank, AugurError::Gateway(GatewayError::InvalidRequest(_))));
    assert!(!reversed.clears_chart());
    assert_eq!(controller.call_count().await, 1);
    // rejected input leaves the last good chart alone
    assert_eq!(session.phase(), PhaseKind::Success);
    assert!(session.chart().is_some());
}

#[tokio::test]
async fn session_recovers_after_failure() {
    let (session, controller) = dynamic_session();
    controller
        .set_behavior("AAPL", MockBehavior::Fail(GatewayError::network("down")))
        .await;
    assert!(session.submit("AAPL", "2024-04-10", "2024-04-12").await.is_err());

    controller
        .set_behavior("AAPL", MockBehavior::Return(three_plus_two()))
        .await;
    let chart = session
        .submit("AAPL", "2024-04-10", "2024-04-12")
        .await
        .unwrap();
    assert_eq!(chart.len(), 5);
    assert_eq!(session.last_error(), None);
}
