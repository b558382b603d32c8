use poem::{
    Endpoint, Middleware, Request, Result as PoemResult,
    http::HeaderMap,
    web::RemoteAddr,
};
use tracing::debug;

pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Best-effort originating address, stored in request data for downstream handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClientIp(pub String);

/// Prefers the forwarding header and falls back to the transport peer.
pub struct ClientIpResolver;

impl<E: Endpoint> Middleware<E> for ClientIpResolver {
    type Output = ClientIpResolverEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ClientIpResolverEndpoint { inner: ep }
    }
}

pub struct ClientIpResolverEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for ClientIpResolverEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, mut req: Request) -> PoemResult<Self::Output> {
        let client_ip = resolve_client_ip(req.headers(), req.remote_addr());
        debug!(client_ip = %client_ip.0, "resolved client address");
        req.set_data(client_ip);
        self.inner.call(req).await
    }
}

pub fn resolve_client_ip(headers: &HeaderMap, remote: &RemoteAddr) -> ResolvedClientIp {
    let forwarded = headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match forwarded {
        Some(value) => ResolvedClientIp(value.to_string()),
        None => ResolvedClientIp(peer_ip(remote)),
    }
}

fn peer_ip(remote: &RemoteAddr) -> String {
    match remote.0.as_socket_addr() {
        Some(addr) => addr.ip().to_string(),
        None => remote.0.to_string(),
    }
}
