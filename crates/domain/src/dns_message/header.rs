use std::fmt;

/// Size in bytes of the fixed DNS message header.
pub const HEADER_LEN: usize = 12;

/// The 16-bit flags word of a DNS header.
///
/// Bit positions are fixed by RFC 1035 and RFC 4035, whatever the role of
/// the message:
///
/// ```text
///  15 | 14-11  | 10 |  9 |  8 |  7 | 6 |  5 |  4 | 3-0
///  QR | OPCODE | AA | TC | RD | RA | Z | AD | CD | RCODE
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeaderFlags(u16);

impl HeaderFlags {
    pub const QR: u16 = 0x8000;
    pub const AA: u16 = 0x0400;
    pub const TC: u16 = 0x0200;
    pub const RD: u16 = 0x0100;
    pub const RA: u16 = 0x0080;
    pub const Z: u16 = 0x0040;
    pub const AD: u16 = 0x0020;
    pub const CD: u16 = 0x0010;

    const OPCODE_MASK: u16 = 0x7800;
    const OPCODE_SHIFT: u16 = 11;
    const RCODE_MASK: u16 = 0x000F;

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Standard query with recursion desired, every other bit clear.
    pub const fn recursive_query() -> Self {
        Self(Self::RD)
    }

    pub fn is_reply(self) -> bool {
        self.has(Self::QR)
    }

    pub fn opcode(self) -> Opcode {
        Opcode::from_u8(((self.0 & Self::OPCODE_MASK) >> Self::OPCODE_SHIFT) as u8)
    }

    pub fn authoritative(self) -> bool {
        self.has(Self::AA)
    }

    pub fn truncated(self) -> bool {
        self.has(Self::TC)
    }

    pub fn recursion_desired(self) -> bool {
        self.has(Self::RD)
    }

    pub fn recursion_available(self) -> bool {
        self.has(Self::RA)
    }

    pub fn reserved(self) -> bool {
        self.has(Self::Z)
    }

    pub fn authentic_data(self) -> bool {
        self.has(Self::AD)
    }

    pub fn checking_disabled(self) -> bool {
        self.has(Self::CD)
    }

    pub fn rcode(self) -> ResponseCode {
        ResponseCode::from_u8((self.0 & Self::RCODE_MASK) as u8)
    }

    fn has(self, mask: u16) -> bool {
        self.0 & mask != 0
    }
}

impl fmt::Display for HeaderFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Query,
    InverseQuery,
    Status,
    Notify,
    Update,
    Unassigned(u8),
}

impl Opcode {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Opcode::Query,
            1 => Opcode::InverseQuery,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Unassigned(other & 0x0F),
        }
    }
}

/// RCODE of a reply. Values 6 through 15 are kept as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Unknown(u8),
}

impl ResponseCode {
    pub fn from_u8(value: u8) -> Self {
        match value & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ResponseCode::NoError => "no errors",
            ResponseCode::FormatError => "format error",
            ResponseCode::ServerFailure => "server failure",
            ResponseCode::NameError => "name error",
            ResponseCode::NotImplemented => "not implemented",
            ResponseCode::Refused => "refused",
            ResponseCode::Unknown(_) => "unknown rcode",
        }
    }

    pub fn is_error(self) -> bool {
        self != ResponseCode::NoError
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Unknown(code) => write!(f, "{} ({})", self.description(), code),
            _ => f.write_str(self.description()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHeader {
    /// Opaque correlation token chosen by the querier.
    pub id: u16,
    pub flags: HeaderFlags,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl MessageHeader {
    /// Header of a standard recursive query carrying a single question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: HeaderFlags::recursive_query(),
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }
}
