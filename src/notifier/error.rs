use thiserror::Error;

use crate::notifier::ReactionTarget;

#[derive(Error, Debug)]
pub enum ReactionError {
    #[error("No reaction target found in `{event}` event")]
    NoTarget { event: String },
    #[error("Cannot add reaction to {target}")]
    Rejected {
        target: ReactionTarget,
        #[source]
        source: anyhow::Error,
    },
}
