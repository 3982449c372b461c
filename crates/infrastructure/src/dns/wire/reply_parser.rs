//! DNS reply decoding
//!
//! A single cursor pass over the reply: header, echoed question section,
//! then `ANCOUNT` answer records. Authority and additional sections are left
//! unread.

use super::{read_header, read_name, WireReader};
use std::net::Ipv4Addr;
use stubdns_domain::{
    CodecError, Message, MessageHeader, Question, RData, RecordClass, RecordType, ResourceRecord,
};

/// Decodes only the 12-byte header.
pub fn parse_header(bytes: &[u8]) -> Result<MessageHeader, CodecError> {
    read_header(&mut WireReader::new(bytes))
}

/// Decodes a reply into its header, questions and answer records.
///
/// A header without the QR bit yields `CodecError::NotAReply` carrying the
/// decoded header; the answer section is not touched in that case.
pub fn parse_message(bytes: &[u8]) -> Result<Message, CodecError> {
    let mut reader = WireReader::new(bytes);
    let header = read_header(&mut reader)?;

    if !header.flags.is_reply() {
        return Err(CodecError::NotAReply(header));
    }

    let mut questions = Vec::new();
    for _ in 0..header.qdcount {
        questions.push(read_question(&mut reader)?);
    }

    let mut answers = Vec::new();
    for _ in 0..header.ancount {
        answers.push(read_record(&mut reader)?);
    }

    Ok(Message {
        header,
        questions,
        answers,
    })
}

pub fn read_question(reader: &mut WireReader<'_>) -> Result<Question, CodecError> {
    let name = read_name(reader)?;
    let qtype = RecordType::from_u16(reader.read_u16()?);
    let qclass = RecordClass::from_u16(reader.read_u16()?);
    Ok(Question::new(name, qtype, qclass))
}

/// Reads one resource record. The cursor always moves past the full RDATA,
/// whatever the type, so the next record starts aligned.
pub fn read_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, CodecError> {
    let name = read_name(reader)?;
    let rtype = RecordType::from_u16(reader.read_u16()?);
    let class = RecordClass::from_u16(reader.read_u16()?);
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()?;
    let payload = reader.read_bytes(rdlength as usize)?;

    let rdata = match rtype {
        RecordType::A => {
            let octets: [u8; 4] = payload
                .try_into()
                .map_err(|_| CodecError::InvalidRdata { rtype, rdlength })?;
            RData::A(Ipv4Addr::from(octets))
        }
        _ => RData::Opaque(payload.to_vec()),
    };

    Ok(ResourceRecord {
        name,
        rtype,
        class,
        ttl,
        rdlength,
        rdata,
    })
}
