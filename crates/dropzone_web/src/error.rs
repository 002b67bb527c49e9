use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while wiring DOM listeners for a drop region.
pub enum SurfaceError {
    /// `addEventListener` rejected the listener.
    #[error("failed to bind `{event}` listener: {message}")]
    Bind {
        /// DOM event name.
        event: &'static str,
        /// Debug rendering of the JavaScript error.
        message: String,
    },
}
