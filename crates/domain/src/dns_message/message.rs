use super::{MessageHeader, Question};
use crate::dns_record::ResourceRecord;
use std::net::Ipv4Addr;

/// A decoded reply. Authority and additional sections are counted in the
/// header but not decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: MessageHeader,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
}

impl Message {
    /// IPv4 addresses carried by the A records of the answer section, in order.
    pub fn addresses(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.answers.iter().filter_map(ResourceRecord::ipv4)
    }
}
