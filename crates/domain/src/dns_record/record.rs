use super::{RecordClass, RecordType};
use crate::domain_name::DomainName;
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    /// Payload of a type this resolver tags but does not interpret.
    Opaque(Vec<u8>),
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(address) => write!(f, "{}", address),
            RData::Opaque(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name
    pub name: DomainName,
    pub rtype: RecordType,
    pub class: RecordClass,
    /// Seconds the record may be cached
    pub ttl: u32,
    /// RDLENGTH as read from the wire. Always equals the number of RDATA
    /// bytes consumed, even when `rdata` is decoded into a fixed-size value.
    pub rdlength: u16,
    pub rdata: RData,
}

impl ResourceRecord {
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.rdata {
            RData::A(address) => Some(address),
            RData::Opaque(_) => None,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.class, self.rtype, self.rdata
        )
    }
}
