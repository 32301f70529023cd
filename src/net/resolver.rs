use std::net::SocketAddr;
use tokio::net;
use tracing::debug;

use crate::errors::ClientError;

// -----------------------------------------------------------------------------
// ----- Resolve ---------------------------------------------------------------

/// Resolve `host:port` into an ordered list of IPv4 candidates.
///
/// The order is whatever the system resolver returned; the connector tries
/// candidates in exactly this order. An empty list after the IPv4 filter is
/// an error, not a silent no-op.
pub async fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>, ClientError> {
    let authority = format!("{host}:{port}");

    debug!("resolving {authority}");

    let addrs = net::lookup_host((host, port))
        .await
        .map_err(|e| ClientError::Resolution {
            authority: authority.clone(),
            reason: e.to_string(),
        })?;

    let candidates: Vec<SocketAddr> = addrs.filter(|addr| addr.is_ipv4()).collect();

    if candidates.is_empty() {
        return Err(ClientError::Resolution {
            authority,
            reason: "no IPv4 address for host".to_string(),
        });
    }

    debug!("{authority} resolved to {} candidate(s)", candidates.len());

    Ok(candidates)
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
