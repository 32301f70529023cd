use bytes::BytesMut;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::errors::ClientError;
use crate::shared_types::Phase;

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

/// One bound for every blocking socket operation: connect, write, read.
pub const IO_LIMIT: Duration = Duration::from_secs(5);

const SCRATCH_CAPACITY: usize = 4096;

// -----------------------------------------------------------------------------
// ----- ClientConnection ------------------------------------------------------

/// The single outbound connection of a run. Owns the stream; dropping it on
/// any exit path is what closes the socket.
#[derive(Debug)]
pub struct ClientConnection {
    stream: TcpStream,
    scratch: BytesMut,
}

// -----------------------------------------------------------------------------
// ----- ClientConnection: Static ----------------------------------------------

impl ClientConnection {
    /// Try candidates in order; the first accepted connection wins.
    ///
    /// A candidate that errors or exceeds IO_LIMIT is dropped and the next
    /// one is tried. Exhausting the list is fatal.
    pub async fn connect_any(
        authority: &str,
        candidates: &[SocketAddr],
    ) -> Result<Self, ClientError> {
        for (nth, addr) in candidates.iter().enumerate() {
            debug!("connect attempt {}/{} to {addr}", nth + 1, candidates.len());

            let stream = match timeout(IO_LIMIT, TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => stream,

                Ok(Err(e)) => {
                    warn!("connect to {addr} failed: {e}");
                    continue;
                }

                Err(_) => {
                    warn!("connect to {addr} gave up after {IO_LIMIT:?}");
                    continue;
                }
            };

            let _ = stream.set_nodelay(true);

            info!("connected to {addr}");

            return Ok(Self {
                stream,
                scratch: BytesMut::with_capacity(SCRATCH_CAPACITY),
            });
        }

        Err(ClientError::Connect {
            authority: authority.to_string(),
            attempts: candidates.len(),
        })
    }
}

// -----------------------------------------------------------------------------
// ----- ClientConnection: Public ----------------------------------------------

impl ClientConnection {
    /// Write the whole payload with one call. A short count is an error, not
    /// something to finish in a loop.
    pub async fn send_all(&mut self, payload: &[u8]) -> Result<(), ClientError> {
        let sent = timeout(IO_LIMIT, self.stream.write(payload))
            .await
            .map_err(|_| ClientError::Timeout {
                phase: Phase::Sending,
                limit: IO_LIMIT,
            })?
            .map_err(|e| ClientError::Send { source: e })?;

        if sent < payload.len() {
            return Err(ClientError::PartialSend {
                sent,
                expected: payload.len(),
            });
        }

        info!("sent {sent} bytes");

        Ok(())
    }

    /// Stream the peer's response into `sink` until an orderly close, which
    /// is success. Returns the total byte count.
    ///
    /// Each chunk is forwarded and flushed before the next read; the scratch
    /// buffer is reused and never grows past its fixed capacity.
    pub async fn drain_to<W>(&mut self, sink: &mut W) -> Result<u64, ClientError>
    where
        W: AsyncWrite + Unpin,
    {
        let mut received: u64 = 0;

        loop {
            self.scratch.clear();

            let n = timeout(IO_LIMIT, self.stream.read_buf(&mut self.scratch))
                .await
                .map_err(|_| ClientError::Timeout {
                    phase: Phase::Receiving,
                    limit: IO_LIMIT,
                })?
                .map_err(|e| ClientError::Receive { source: e })?;

            if n == 0 {
                info!("connection closed by peer after {received} bytes");
                return Ok(received);
            }

            sink.write_all(&self.scratch[..n])
                .await
                .map_err(|e| ClientError::Output { source: e })?;

            sink.flush()
                .await
                .map_err(|e| ClientError::Output { source: e })?;

            received += n as u64;
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
