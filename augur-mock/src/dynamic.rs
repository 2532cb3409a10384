use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use augur_core::{GatewayError, PredictionBackend, PredictionRequest, PredictionResponse};

use crate::fixture_or_unknown;

/// Instruction for how `predict` should behave for a given symbol.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Return the provided response immediately.
    Return(PredictionResponse),
    /// Fail immediately with the provided error.
    Fail(GatewayError),
    /// Never answer (simulate a hung service).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior>,
    fallback: Option<MockBehavior>,
    requests: Vec<PredictionRequest>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `predict` calls for a specific symbol.
    pub async fn set_behavior(&self, symbol: impl Into<String>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(symbol.into(), behavior);
    }

    /// Set the behavior for symbols without their own rule.
    ///
    /// Without a fallback, such symbols get fixture data.
    pub async fn set_fallback_behavior(&self, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.fallback = Some(behavior);
    }

    /// Return a copy of every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<PredictionRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Number of `predict` calls received so far.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.fallback = None;
        guard.requests.clear();
    }
}

/// A backend that defers all behavior to an external controller.
pub struct DynamicMockBackend {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockBackend {
    /// Create a new dynamic mock backend and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn PredictionBackend>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn PredictionBackend>, controller)
    }
}

#[async_trait]
impl PredictionBackend for DynamicMockBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn predict(&self, req: &PredictionRequest) -> Result<PredictionResponse, GatewayError> {
        // Log the call and snapshot the behavior without holding the lock across await
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(req.clone());
            guard
                .rules
                .get(req.symbol())
                .or(guard.fallback.as_ref())
                .cloned()
        };
        match behavior {
            Some(MockBehavior::Return(resp)) => Ok(resp),
            Some(MockBehavior::Fail(err)) => Err(err),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Ok(fixture_or_unknown(req)),
        }
    }
}
