//! Request lifecycle state machine.
//!
//! `Idle -> Loading -> {Success, Failed}`, and back to `Loading` on the next
//! submission. The machine is pure: [`Lifecycle::handle`] consumes the current
//! state and an [`Event`] and returns the next state plus the [`Action`]s the
//! driver (a UI, or [`crate::Session`]) must carry out.

use augur_core::{
    AugurError, ChartSeries, GatewayError, PredictionRequest, PredictionResponse, merge_series,
};
use serde::{Deserialize, Serialize};

/// Where a session currently is.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// One request in flight; submissions are rejected.
    Loading {
        /// The request being served.
        request: PredictionRequest,
    },
    /// The last request produced a chart.
    Success {
        /// The request that was served.
        request: PredictionRequest,
        /// The response as returned by the service.
        response: PredictionResponse,
        /// Chart derived from `response`.
        chart: ChartSeries,
    },
    /// The last request failed; no chart is shown.
    Failed {
        /// The request that failed.
        request: PredictionRequest,
        /// Why it failed.
        error: AugurError,
    },
}

/// Data-free view of [`Phase`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// See [`Phase::Idle`].
    Idle,
    /// See [`Phase::Loading`].
    Loading,
    /// See [`Phase::Success`].
    Success,
    /// See [`Phase::Failed`].
    Failed,
}

/// Inputs to the machine.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The user submitted a validated request.
    Submit(PredictionRequest),
    /// The gateway call for the in-flight request finished.
    Completed(Result<PredictionResponse, GatewayError>),
}

/// Effects the driver must perform, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Disable the submit control.
    DisableSubmit,
    /// Re-enable the submit control.
    EnableSubmit,
    /// Call the gateway with this request.
    Dispatch(PredictionRequest),
    /// Draw this chart.
    Render(ChartSeries),
    /// Remove any chart currently drawn.
    ClearChart,
    /// Show this error; the request cycle is over.
    Report(AugurError),
    /// The event was refused; nothing else changed.
    Reject(AugurError),
}

/// The state machine itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lifecycle {
    /// Current phase.
    pub phase: Phase,
}

impl Lifecycle {
    /// Machine in `Idle`.
    #[must_use]
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Apply `event`, returning the next state and the actions to perform.
    ///
    /// - `Submit` while `Loading` is rejected with `AugurError::Busy`.
    /// - `Submit` from any other phase moves to `Loading`, clears the chart and
    ///   dispatches the request.
    /// - `Completed` while `Loading` runs the series merger on success and
    ///   settles in `Success` or `Failed`; failures clear the chart.
    /// - `Completed` in any other phase is stale and ignored.
    #[must_use]
    pub fn handle(self, event: Event) -> (Self, Vec<Action>) {
        match (self.phase, event) {
            (phase @ Phase::Loading { .. }, Event::Submit(_)) => (
                Self { phase },
                vec![Action::Reject(AugurError::Busy)],
            ),
            (_, Event::Submit(request)) => (
                Self {
                    phase: Phase::Loading {
                        request: request.clone(),
                    },
                },
                vec![
                    Action::DisableSubmit,
                    Action::ClearChart,
                    Action::Dispatch(request),
                ],
            ),
            (Phase::Loading { request }, Event::Completed(outcome)) => Self::settle(request, outcome),
            (phase, Event::Completed(_)) => (Self { phase }, Vec::new()),
        }
    }

    fn settle(
        request: PredictionRequest,
        outcome: Result<PredictionResponse, GatewayError>,
    ) -> (Self, Vec<Action>) {
        let result = outcome.map_err(AugurError::from).and_then(|response| {
            if let Some(message) = response.error() {
                return Err(AugurError::backend(message));
            }
            let chart = merge_series(&response, request.start_date())?;
            Ok((response, chart))
        });
        match result {
            Ok((response, chart)) => {
                let actions = vec![Action::Render(chart.clone()), Action::EnableSubmit];
                (
                    Self {
                        phase: Phase::Success {
                            request,
                            response,
                            chart,
                        },
                    },
                    actions,
                )
            }
            Err(error) => {
                let actions = vec![
                    Action::ClearChart,
                    Action::Report(error.clone()),
                    Action::EnableSubmit,
                ];
                (
                    Self {
                        phase: Phase::Failed { request, error },
                    },
                    actions,
                )
            }
        }
    }

    /// Data-free view of the current phase.
    #[must_use]
    pub const fn kind(&self) -> PhaseKind {
        match self.phase {
            Phase::Idle => PhaseKind::Idle,
            Phase::Loading { .. } => PhaseKind::Loading,
            Phase::Success { .. } => PhaseKind::Success,
            Phase::Failed { .. } => PhaseKind::Failed,
        }
    }

    /// True while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub const fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// The request most recently submitted, if any.
    #[must_use]
    pub const fn request(&self) -> Option<&PredictionRequest> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Loading { request }
            | Phase::Success { request, .. }
            | Phase::Failed { request, .. } => Some(request),
        }
    }

    /// Chart to show; only present in `Success`.
    #[must_use]
    pub const fn chart(&self) -> Option<&ChartSeries> {
        match &self.phase {
            Phase::Success { chart, .. } => Some(chart),
            _ => None,
        }
    }

    /// Response behind the current chart; only present in `Success`.
    #[must_use]
    pub const fn response(&self) -> Option<&PredictionResponse> {
        match &self.phase {
            Phase::Success { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Error of the last request; only present in `Failed`.
    #[must_use]
    pub const fn error(&self) -> Option<&AugurError> {
        match &self.phase {
            Phase::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}
