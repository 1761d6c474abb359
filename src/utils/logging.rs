use anyhow::Error;
use tracing::span::Span;

pub trait LogFailure {
    /// Logs a failure that does not interrupt the current operation.
    fn log_warning(&self, error: &Error);
}

impl LogFailure for Span {
    fn log_warning(&self, error: &Error) {
        self.in_scope(|| {
            tracing::warn!("{error:?}");
        });
    }
}
