use augur::{AugurError, PhaseKind};
use augur_mock::MockBehavior;

use crate::helpers::dynamic_session;

#[tokio::test]
async fn second_submission_while_loading_is_refused() {
    let (session, controller) = dynamic_session();
    controller.set_behavior("AAPL", MockBehavior::Hang).await;

    let s = session.clone();
    let first = tokio::spawn(async move { s.submit("AAPL", "2024-04-10", "2024-04-12").await });

    while controller.call_count().await == 0 {
        tokio::task::yield_now().await;
    }
    assert_eq!(session.phase(), PhaseKind::Loading);
    assert!(!session.submit_enabled());

    let err = session
        .submit("MSFT", "2024-04-10", "2024-04-12")
        .await
        .unwrap_err();
    assert_eq!(err, AugurError::Busy);
    // Busy is checked before validation
    let err = session.submit("", "bad", "dates").await.unwrap_err();
    assert_eq!(err, AugurError::Busy);

    assert_eq!(controller.call_count().await, 1);
    assert_eq!(session.phase(), PhaseKind::Loading);
    first.abort();
}
