#![allow(dead_code)]
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use stubdns_domain::DomainError;
use stubdns_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use stubdns_infrastructure::dns::wire::encode_name;

struct Answer {
    name: String,
    rtype: u16,
    class: u16,
    ttl: u32,
    rdata: Vec<u8>,
}

/// Builds reply bytes with uncompressed names.
pub struct ReplyBuilder {
    id: u16,
    flags: u16,
    questions: Vec<String>,
    answers: Vec<Answer>,
    ancount: Option<u16>,
}

impl ReplyBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180,
            questions: Vec::new(),
            answers: Vec::new(),
            ancount: None,
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str) -> Self {
        self.questions.push(name.to_string());
        self
    }

    pub fn answer(mut self, name: &str, rtype: u16, ttl: u32, rdata: Vec<u8>) -> Self {
        self.answers.push(Answer {
            name: name.to_string(),
            rtype,
            class: 1,
            ttl,
            rdata,
        });
        self
    }

    pub fn a_answer(self, name: &str, ttl: u32, octets: [u8; 4]) -> Self {
        self.answer(name, 1, ttl, octets.to_vec())
    }

    pub fn cname_answer(self, name: &str, ttl: u32, target: &str) -> Self {
        let rdata = encode_name(target).unwrap();
        self.answer(name, 5, ttl, rdata)
    }

    pub fn mx_answer(self, name: &str, ttl: u32, preference: u16, exchange: &str) -> Self {
        let mut rdata = preference.to_be_bytes().to_vec();
        rdata.extend_from_slice(&encode_name(exchange).unwrap());
        self.answer(name, 15, ttl, rdata)
    }

    /// Overrides ANCOUNT regardless of the answers actually appended.
    pub fn ancount(mut self, ancount: u16) -> Self {
        self.ancount = Some(ancount);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let ancount = self.ancount.unwrap_or(self.answers.len() as u16);

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        buf.extend_from_slice(&ancount.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        for name in &self.questions {
            buf.extend_from_slice(&encode_name(name).unwrap());
            buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        }

        for answer in &self.answers {
            buf.extend_from_slice(&encode_name(&answer.name).unwrap());
            buf.extend_from_slice(&answer.rtype.to_be_bytes());
            buf.extend_from_slice(&answer.class.to_be_bytes());
            buf.extend_from_slice(&answer.ttl.to_be_bytes());
            buf.extend_from_slice(&(answer.rdata.len() as u16).to_be_bytes());
            buf.extend_from_slice(&answer.rdata);
        }

        buf
    }
}

/// Transport that answers every query with a canned reply, optionally
/// rewriting the reply ID to echo the query, and records what it was sent.
pub struct MockTransport {
    reply: Vec<u8>,
    echo_id: bool,
    sent: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    pub fn replying(reply: Vec<u8>) -> Self {
        Self {
            reply,
            echo_id: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn replying_verbatim(reply: Vec<u8>) -> Self {
        Self {
            reply,
            echo_id: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent.lock().unwrap().push(message_bytes.to_vec());

        let mut bytes = self.reply.clone();
        if self.echo_id && bytes.len() >= 2 && message_bytes.len() >= 2 {
            bytes[..2].copy_from_slice(&message_bytes[..2]);
        }

        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
