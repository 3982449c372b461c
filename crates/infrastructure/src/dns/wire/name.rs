use super::WireReader;
use stubdns_domain::domain_name::MAX_NAME_LEN;
use stubdns_domain::{CodecError, DomainName};

/// Top two bits of a length byte select the label type (RFC 1035 §4.1.4,
/// RFC 6891 §5). `00` is a normal label, `11` a compression pointer.
const LABEL_TYPE_MASK: u8 = 0xC0;
const COMPRESSION_POINTER: u8 = 0xC0;

/// Encodes a dotted name as `(length, label)*` followed by the zero-length
/// root label. Empty input encodes to the terminator alone.
pub fn encode_name(name: &str) -> Result<Vec<u8>, CodecError> {
    let name: DomainName = name.parse()?;
    let mut buf = Vec::with_capacity(name.encoded_len());
    write_name(&name, &mut buf);
    Ok(buf)
}

pub fn write_name(name: &DomainName, buf: &mut Vec<u8>) {
    for label in name.labels() {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label);
    }
    buf.push(0x00);
}

/// Decodes the name starting at `start` and returns it with the number of
/// bytes consumed, terminator included.
pub fn decode_name(buf: &[u8], start: usize) -> Result<(DomainName, usize), CodecError> {
    let mut reader = WireReader::at(buf, start)?;
    let name = read_name(&mut reader)?;
    Ok((name, reader.position() - start))
}

/// Reads one uncompressed name at the cursor.
///
/// Compression pointers are rejected with `UnsupportedCompression`; treating
/// their marker byte as a label length would misparse the rest of the message.
pub fn read_name(reader: &mut WireReader<'_>) -> Result<DomainName, CodecError> {
    let start = reader.position();
    let mut labels = Vec::new();
    let mut encoded_len = 1;

    loop {
        let offset = reader.position();
        let len = reader.read_u8()?;
        if len == 0 {
            break;
        }

        match len & LABEL_TYPE_MASK {
            0 => {}
            COMPRESSION_POINTER => return Err(CodecError::UnsupportedCompression { offset }),
            _ => {
                return Err(CodecError::MalformedName {
                    offset,
                    reason: "reserved label type",
                })
            }
        }

        let label = reader
            .read_bytes(len as usize)
            .map_err(|_| CodecError::MalformedName {
                offset,
                reason: "label runs past end of message",
            })?;

        encoded_len += 1 + label.len();
        if encoded_len > MAX_NAME_LEN {
            return Err(CodecError::MalformedName {
                offset: start,
                reason: "name longer than 255 bytes",
            });
        }
        labels.push(label.to_vec());
    }

    Ok(DomainName::from_labels(labels))
}
