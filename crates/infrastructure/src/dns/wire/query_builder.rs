//! DNS query construction
//!
//! Builds a standard recursive query for a single A/IN question directly in
//! wire format.

use super::{write_header, write_name, MAX_UDP_MESSAGE_SIZE};
use stubdns_domain::{CodecError, DomainName, MessageHeader, Question};

/// Build a query for the A records of `domain`, tagged with `id`.
///
/// The header carries only the RD flag and QDCOUNT=1. The name is checked
/// against the RFC 1035 label and name limits before encoding, so the
/// result always fits in a 512-byte UDP payload.
pub fn build_query(domain: &str, id: u16) -> Result<Vec<u8>, CodecError> {
    let name: DomainName = domain.parse()?;
    let question = Question::a_record(name);

    let mut buf = Vec::with_capacity(MAX_UDP_MESSAGE_SIZE);
    write_header(&MessageHeader::query(id), &mut buf);
    write_name(&question.name, &mut buf);
    buf.extend_from_slice(&question.qtype.to_u16().to_be_bytes());
    buf.extend_from_slice(&question.qclass.to_u16().to_be_bytes());

    debug_assert!(buf.len() <= MAX_UDP_MESSAGE_SIZE);
    Ok(buf)
}

/// Same as [`build_query`] with a random ID, returned alongside the bytes
/// for response matching.
pub fn build_query_with_random_id(domain: &str) -> Result<(u16, Vec<u8>), CodecError> {
    let id = fastrand::u16(..);
    let bytes = build_query(domain, id)?;
    Ok((id, bytes))
}
