mod helpers;

#[path = "session/session_success.rs"]
mod session_success;
#[path = "session/session_failures.rs"]
mod session_failures;
#[path = "session/session_busy.rs"]
mod session_busy;
#[path = "session/session_hung_backend.rs"]
mod session_hung_backend;
#[path = "session/session_abandoned.rs"]
mod session_abandoned;
