use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use ferrous_visits_domain::client_address::{FORWARDED_FOR_HEADER, REAL_IP_HEADER};
use ferrous_visits_domain::RequestOrigin;
use std::convert::Infallible;
use std::net::SocketAddr;

/// Socket-level peer address placed in request extensions by an outer
/// acceptor. Consulted only when no connection-level peer is known.
///
/// The bundled server never inserts it: `axum::serve` with connect info
/// always supplies `ConnectInfo`. A proxy layer or custom acceptor that
/// wraps the router must add it to each request itself.
#[derive(Debug, Clone, Copy)]
pub struct SocketPeer(pub SocketAddr);

/// Every address source a request carries, captured for address resolution.
#[derive(Debug, Clone)]
pub struct ClientOrigin(pub RequestOrigin);

impl<S> FromRequestParts<S> for ClientOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        let socket_addr = parts
            .extensions
            .get::<SocketPeer>()
            .map(|SocketPeer(addr)| addr.ip().to_string());

        Ok(Self(RequestOrigin {
            forwarded_for: header_value(&parts.headers, FORWARDED_FOR_HEADER),
            real_ip: header_value(&parts.headers, REAL_IP_HEADER),
            peer_addr,
            socket_addr,
        }))
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
