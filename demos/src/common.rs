use augur_core::{AugurError, PredictionBackend};
use std::sync::Arc;

/// Environment variable that switches the demos to the fixture backend.
pub const ENV_USE_MOCK: &str = "AUGUR_DEMOS_USE_MOCK";

/// Return a prediction backend for the demos.
///
/// Uses the fixture backend when `AUGUR_DEMOS_USE_MOCK` is set, otherwise the
/// HTTP backend configured from `AUGUR_BACKEND_URL`.
///
/// # Errors
/// Returns `AugurError::Config` if the HTTP backend is not configured.
pub fn get_backend() -> Result<Arc<dyn PredictionBackend>, AugurError> {
    if std::env::var(ENV_USE_MOCK).is_ok() {
        println!("--- (Using Mock Backend for CI) ---");
        Ok(Arc::new(augur_mock::MockBackend::new()))
    } else {
        Ok(Arc::new(augur_http::HttpBackend::from_env()?))
    }
}
