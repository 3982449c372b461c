use super::WireReader;
use stubdns_domain::{CodecError, HeaderFlags, MessageHeader, HEADER_LEN};

/// Appends the 12-byte header: ID, FLAGS, QDCOUNT, ANCOUNT, NSCOUNT, ARCOUNT.
pub fn write_header(header: &MessageHeader, buf: &mut Vec<u8>) {
    buf.reserve(HEADER_LEN);
    buf.extend_from_slice(&header.id.to_be_bytes());
    buf.extend_from_slice(&header.flags.bits().to_be_bytes());
    buf.extend_from_slice(&header.qdcount.to_be_bytes());
    buf.extend_from_slice(&header.ancount.to_be_bytes());
    buf.extend_from_slice(&header.nscount.to_be_bytes());
    buf.extend_from_slice(&header.arcount.to_be_bytes());
}

/// Fails as a whole when fewer than 12 bytes remain, so the error reports
/// the full header as missing rather than the first short field.
pub fn read_header(reader: &mut WireReader<'_>) -> Result<MessageHeader, CodecError> {
    if reader.remaining() < HEADER_LEN {
        return Err(CodecError::TruncatedMessage {
            offset: reader.position(),
            needed: HEADER_LEN,
            available: reader.remaining(),
        });
    }

    Ok(MessageHeader {
        id: reader.read_u16()?,
        flags: HeaderFlags::from_bits(reader.read_u16()?),
        qdcount: reader.read_u16()?,
        ancount: reader.read_u16()?,
        nscount: reader.read_u16()?,
        arcount: reader.read_u16()?,
    })
}
