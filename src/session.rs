use tokio::io::stdout;
use tracing::debug;

use crate::errors::ClientError;
use crate::net::{ClientConnection, resolver};

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

/// The one line sent after connecting. Fixed ASCII, CRLF-terminated, sent
/// exactly once per run.
pub const GREETING: &[u8] = b"hello from linecat\r\n";

// -----------------------------------------------------------------------------
// ----- Exchange --------------------------------------------------------------

/// One request/response exchange: resolve, connect, send the greeting, then
/// stream the reply to stdout until the peer hangs up.
#[derive(Debug)]
pub struct Exchange {
    host: String,
    port: u16,
}

// -----------------------------------------------------------------------------
// ----- Exchange: Static ------------------------------------------------------

impl Exchange {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Exchange: Public ------------------------------------------------------

impl Exchange {
    /// Run the pipeline front to back. Returns the response byte count.
    ///
    /// The connection lives inside this call; every return path, success or
    /// error, releases it by scope.
    pub async fn run(self) -> Result<u64, ClientError> {
        let authority = format!("{}:{}", self.host, self.port);

        let candidates = resolver::resolve(&self.host, self.port).await?;

        let mut conn = ClientConnection::connect_any(&authority, &candidates).await?;

        conn.send_all(GREETING).await?;

        let mut sink = stdout();
        let received = conn.drain_to(&mut sink).await?;

        debug!("exchange with {authority} complete");

        Ok(received)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_is_a_single_crlf_line() {
        assert!(GREETING.is_ascii());
        assert!(GREETING.ends_with(b"\r\n"));
        assert_eq!(GREETING.iter().filter(|b| **b == b'\n').count(), 1);
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
