mod recording_session;
pub use recording_session::{RecordingSession, SessionOp};

/// Routes `tracing` events (through the `log` bridge) to the test output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
