//! A backend that never answers keeps the session in `Loading` for as long as
//! the request future is alive. There is no session-level timeout.

use augur::{AugurError, PhaseKind};
use augur_mock::MockBehavior;
use tokio_test::{assert_pending, task};

use crate::helpers::dynamic_session;

#[tokio::test]
async fn hung_backend_leaves_session_loading() {
    let (session, controller) = dynamic_session();
    controller.set_fallback_behavior(MockBehavior::Hang).await;

    let mut pending = task::spawn(session.submit("AAPL", "2024-04-10", "2024-04-12"));
    assert_pending!(pending.poll());
    assert_pending!(pending.poll());

    let view = session.view();
    assert_eq!(view.phase, PhaseKind::Loading);
    assert!(!view.submit_enabled);
    assert_eq!(view.chart, None);
    assert_eq!(
        session.submit("AAPL", "2024-04-10", "2024-04-12").await,
        Err(AugurError::Busy)
    );
    assert_eq!(controller.call_count().await, 1);
}
