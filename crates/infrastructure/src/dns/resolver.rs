//! Stub resolution: encode one question, exchange it over a transport,
//! decode the reply.

use super::transport::DnsTransport;
use super::wire::{build_query, build_query_with_random_id, parse_message};
use std::fmt::Write;
use std::time::Duration;
use stubdns_domain::{DomainError, Message};
use tracing::{debug, info, warn};

pub struct StubResolver<T> {
    transport: T,
    timeout: Duration,
}

impl<T: DnsTransport> StubResolver<T> {
    pub fn new(transport: T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve the A records of `domain` using a random query ID.
    pub async fn resolve(&self, domain: &str) -> Result<Message, DomainError> {
        let (id, query) = build_query_with_random_id(domain)?;
        self.exchange(domain, id, query).await
    }

    /// Resolve the A records of `domain` using a caller-chosen query ID.
    pub async fn resolve_with_id(&self, domain: &str, id: u16) -> Result<Message, DomainError> {
        let query = build_query(domain, id)?;
        self.exchange(domain, id, query).await
    }

    async fn exchange(&self, domain: &str, id: u16, query: Vec<u8>) -> Result<Message, DomainError> {
        debug!(
            domain = %domain,
            id = id,
            query_len = query.len(),
            bytes = %hex_dump(&query),
            "Query encoded"
        );

        let response = self.transport.send(&query, self.timeout).await?;

        debug!(
            protocol = response.protocol_used,
            reply_len = response.bytes.len(),
            bytes = %hex_dump(&response.bytes),
            "Reply received"
        );

        let message = parse_message(&response.bytes).map_err(|e| {
            if e.is_recoverable() {
                warn!(domain = %domain, error = %e, "Reply rejected");
            }
            DomainError::from(e)
        })?;

        info!(
            domain = %domain,
            id = message.header.id,
            rcode = %message.header.flags.rcode(),
            answers = message.answers.len(),
            "Reply decoded"
        );

        let rcode = message.header.flags.rcode();
        if rcode.is_error() {
            warn!(domain = %domain, rcode = %rcode, "Upstream reported an error");
        }

        Ok(message)
    }
}

/// Space-separated lowercase hex, as printed by packet dumps.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02x}", byte);
    }
    out
}
