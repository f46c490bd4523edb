// Diagnostic endpoints. Handlers are async by the framework's contract
// even though these two never await.
#![allow(clippy::unused_async)]

use crate::error::AppError;

/// `GET /` -- static greeting, kept word-for-word from the old portal.
pub async fn homepage() -> &'static str {
    "Đây là homepage clb mạng LHU-CISCO"
}

/// `GET /ip` -- the server's resolved outbound IP, for pointing portal
/// clients at the right backend during lab sessions.
pub async fn server_ip() -> Result<String, AppError> {
    // A connected UDP socket picks the outbound interface without
    // sending a packet.
    let socket = std::net::UdpSocket::bind("0.0.0.0:0")
        .and_then(|s| s.connect("8.8.8.8:53").map(|()| s))
        .map_err(|e| AppError::Remote(e.to_string()))?;
    let addr = socket
        .local_addr()
        .map_err(|e| AppError::Remote(e.to_string()))?;
    Ok(addr.ip().to_string())
}
