use std::fmt;

/// Represents the stage a run has reached in its single forward pipeline.
///
/// A run moves through these stages strictly in order and never back. The
/// enum exists so timeouts and diagnostic lines can name the blocking
/// operation they interrupted; it carries no behavior of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Turning the host/port pair into candidate socket addresses.
    Resolving,

    /// Attempting candidates in resolver order until one accepts.
    Connecting,

    /// Writing the fixed request line to the open connection.
    Sending,

    /// Draining the response until the peer closes the stream.
    Receiving,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Resolving => "resolving",
            Phase::Connecting => "connecting",
            Phase::Sending => "sending",
            Phase::Receiving => "receiving",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
