use std::time::Duration;
use thiserror::Error;

use crate::shared_types::Phase;

// -----------------------------------------------------------------------------
// ----- ClientError -----------------------------------------------------------

/// Everything that can end a run early. Every variant is terminal: the caller
/// logs it once and exits nonzero, there is no retry at any layer.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not resolve {authority}: {reason}")]
    Resolution { authority: String, reason: String },

    #[error("no candidate accepted a connection to {authority} ({attempts} tried)")]
    Connect { authority: String, attempts: usize },

    #[error("timed out while {phase} (limit {limit:?})")]
    Timeout { phase: Phase, limit: Duration },

    #[error("short write: sent {sent} of {expected} bytes")]
    PartialSend { sent: usize, expected: usize },

    #[error("send failed: {source}")]
    Send { source: std::io::Error },

    #[error("receive failed: {source}")]
    Receive { source: std::io::Error },

    #[error("could not forward response to stdout: {source}")]
    Output { source: std::io::Error },
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
