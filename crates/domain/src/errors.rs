use crate::dns_message::MessageHeader;
use crate::dns_record::RecordType;
use thiserror::Error;

/// Failures of the wire-format codec. Each one is local to a single
/// encode or decode call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Truncated message: {needed} bytes needed at offset {offset}, {available} available")]
    TruncatedMessage {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Malformed name at offset {offset}: {reason}")]
    MalformedName { offset: usize, reason: &'static str },

    #[error("Message {} is not a reply (flags {:#06x})", .0.id, .0.flags.bits())]
    NotAReply(MessageHeader),

    #[error("Compression pointer at offset {offset} is not supported")]
    UnsupportedCompression { offset: usize },

    #[error("Label '{label}' is {len} bytes long (maximum 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Encoded name is {len} bytes long (maximum 255)")]
    NameTooLong { len: usize },

    #[error("Empty label in domain name '{0}'")]
    EmptyLabel(String),

    #[error("Invalid escape sequence in domain name '{0}'")]
    InvalidEscape(String),

    #[error("Invalid {rtype} record data length: {rdlength}")]
    InvalidRdata { rtype: RecordType, rdlength: u16 },
}

impl CodecError {
    /// `NotAReply` still carries a fully decoded header, so callers can
    /// report it instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CodecError::NotAReply(_))
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid DNS message: {0}")]
    Codec(#[from] CodecError),

    #[error("Invalid upstream address: {0}")]
    InvalidServerAddress(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Response ID mismatch: expected {expected}, received {received}")]
    ResponseIdMismatch { expected: u16, received: u16 },
}
