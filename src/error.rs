// Library error type

use thiserror::Error;

/// Errors surfaced by widget calls.
///
/// Cancellation, escape, and a missing or crashing dialog binary are *not*
/// errors: they all collapse into the `Ok(None)` absence value of
/// [`DialogResult`](crate::DialogResult). The only loud failure is a response
/// that violates the decoding contract for its widget, which indicates a
/// mismatch between this crate and the installed dialog version.
#[derive(Debug, Error)]
pub enum Error {
    /// dialog exited 0 but its output did not match the expected shape.
    #[error("malformed {widget} response from dialog: {output:?}")]
    MalformedResponse {
        widget: &'static str,
        output: String,
    },
}

impl Error {
    pub(crate) fn malformed(widget: &'static str, output: &str) -> Self {
        Error::MalformedResponse {
            widget,
            output: output.to_string(),
        }
    }
}
