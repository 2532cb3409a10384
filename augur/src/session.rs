use std::sync::{Mutex, MutexGuard, PoisonError};

use augur_core::{AugurError, ChartSeries, GatewayError, PredictionRequest};
use serde::Serialize;

use crate::gateway::Gateway;
use crate::lifecycle::{Action, Event, Lifecycle, PhaseKind};

/// Session-scoped controller owning the request lifecycle.
///
/// All state changes go through [`Lifecycle::handle`]. At most one request is
/// in flight per session: a submission while `Loading` is refused with
/// `AugurError::Busy` and never reaches the gateway. The state lock is never
/// held across the gateway call.
///
/// There is no timeout of its own: if the backend never answers, the session
/// stays `Loading` and keeps refusing submissions. Dropping the `submit`
/// future before it finishes (a caller-side timeout, `select!`, an aborted
/// task) settles the session as `Failed` with a network error, so it can be
/// used again.
pub struct Session {
    gateway: Gateway,
    lifecycle: Mutex<Lifecycle>,
}

/// Snapshot of everything a UI needs to render a session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionView {
    /// Current phase.
    pub phase: PhaseKind,
    /// Whether the submit control is enabled.
    pub submit_enabled: bool,
    /// Symbol of the latest submission.
    pub symbol: Option<String>,
    /// Chart to draw; only after a successful request.
    pub chart: Option<ChartSeries>,
    /// Model accuracy as reported by the service; only after a successful request.
    pub accuracy: Option<f64>,
    /// User-facing error text; only after a failed request.
    pub error_message: Option<String>,
}

impl Session {
    /// New idle session over `gateway`.
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            lifecycle: Mutex::new(Lifecycle::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn step(&self, event: Event) -> Vec<Action> {
        let mut guard = self.state();
        let current = std::mem::take(&mut *guard);
        #[cfg(feature = "tracing")]
        let from = current.kind();
        let (next, actions) = current.handle(event);
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?from, to = ?next.kind(), actions = actions.len(), "lifecycle step");
        *guard = next;
        actions
    }

    /// Validate the form input and run one request cycle.
    ///
    /// Returns the chart on success. On failure the session is `Failed`, any
    /// previous chart is gone, and the error is returned.
    ///
    /// # Errors
    /// - `AugurError::Busy` if a request is already in flight (checked first).
    /// - `AugurError::Gateway(InvalidRequest)` for bad input; the session state
    ///   is left untouched and no network call is made.
    /// - Any error of [`Session::submit_request`].
    pub async fn submit(
        &self,
        symbol: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<ChartSeries, AugurError> {
        if self.state().is_loading() {
            #[cfg(feature = "tracing")]
            tracing::warn!(symbol, "submission refused: request already in flight");
            return Err(AugurError::Busy);
        }
        let request = PredictionRequest::parse(symbol, start_date, end_date)?;
        self.submit_request(request).await
    }

    /// Run one request cycle for an already-validated request.
    ///
    /// # Errors
    /// - `AugurError::Busy` if a request is already in flight.
    /// - `AugurError::Gateway` for transport failures.
    /// - `AugurError::Backend` if the service reported a domain error.
    /// - `AugurError::Merge` if the response had nothing to chart.
    pub async fn submit_request(&self, request: PredictionRequest) -> Result<ChartSeries, AugurError> {
        let mut dispatch = None;
        for action in self.step(Event::Submit(request)) {
            match action {
                Action::Dispatch(req) => dispatch = Some(req),
                Action::Reject(err) => return Err(err),
                _ => {}
            }
        }
        let Some(request) = dispatch else {
            return Err(AugurError::Busy);
        };

        let mut in_flight = InFlight {
            session: self,
            armed: true,
        };
        let outcome = self.gateway.send(&request).await;
        in_flight.armed = false;

        let mut result = Err(AugurError::Busy);
        for action in self.step(Event::Completed(outcome)) {
            match action {
                Action::Render(chart) => result = Ok(chart),
                Action::Report(err) => result = Err(err),
                _ => {}
            }
        }
        result
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        self.state().kind()
    }

    /// Whether a new submission would be accepted.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.state().submit_enabled()
    }

    /// Chart of the last successful request, if it is still current.
    #[must_use]
    pub fn chart(&self) -> Option<ChartSeries> {
        self.state().chart().cloned()
    }

    /// Error of the last request, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<AugurError> {
        self.state().error().cloned()
    }

    /// Consistent snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let state = self.state();
        SessionView {
            phase: state.kind(),
            submit_enabled: state.submit_enabled(),
            symbol: state.request().map(|r| r.symbol().to_string()),
            chart: state.chart().cloned(),
            accuracy: state.response().map(|r| r.accuracy),
            error_message: state.error().map(AugurError::user_message),
        }
    }
}

/// Settles the lifecycle if a request future is dropped while awaiting the backend.
struct InFlight<'a> {
    session: &'a Session,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            #[cfg(feature = "tracing")]
            tracing::warn!("prediction request abandoned before the backend answered");
            self.session
                .step(Event::Completed(Err(GatewayError::network("request abandoned"))));
        }
    }
}
