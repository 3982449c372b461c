use std::net::SocketAddr;
use std::time::Duration;
use stubdns_domain::DomainError;

/// Turns a configured `host:port` into a socket address.
///
/// Literal addresses are used as-is. Hostnames go through the system
/// resolver and the first IPv4 result wins, falling back to the first
/// address of any family.
pub async fn resolve_server(server: &str, timeout: Duration) -> Result<SocketAddr, DomainError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let (host, port) = server
        .rsplit_once(':')
        .and_then(|(host, port)| Some((host, port.parse::<u16>().ok()?)))
        .ok_or_else(|| {
            DomainError::InvalidServerAddress(format!(
                "'{}' (expected HOST:PORT or IP:PORT)",
                server
            ))
        })?;

    let target = format!("{}:{}", host, port);

    let addrs: Vec<SocketAddr> = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| {
            DomainError::InvalidServerAddress(format!("resolution failed for {}: {}", target, e))
        })?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| {
            DomainError::InvalidServerAddress(format!("no addresses found for {}", target))
        })
}
