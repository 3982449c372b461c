#![allow(dead_code)]
use stubdns_domain::{DomainName, RData, RecordClass, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

pub struct RecordBuilder {
    name: DomainName,
    record_type: RecordType,
    class: RecordClass,
    ttl: u32,
    rdata: RData,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".parse().unwrap(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl: 300,
            rdata: RData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.parse().unwrap();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ipv4(mut self, address: Ipv4Addr) -> Self {
        self.record_type = RecordType::A;
        self.rdata = RData::A(address);
        self
    }

    pub fn opaque(mut self, bytes: Vec<u8>) -> Self {
        self.rdata = RData::Opaque(bytes);
        self
    }

    pub fn build(self) -> ResourceRecord {
        let rdlength = match &self.rdata {
            RData::A(_) => 4,
            RData::Opaque(bytes) => bytes.len() as u16,
        };
        ResourceRecord {
            name: self.name,
            rtype: self.record_type,
            class: self.class,
            ttl: self.ttl,
            rdlength,
            rdata: self.rdata,
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
