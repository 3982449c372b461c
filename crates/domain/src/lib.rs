//! Stub DNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod domain_name;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, UpstreamConfig};
pub use dns_message::{HeaderFlags, Message, MessageHeader, Opcode, Question, ResponseCode, HEADER_LEN};
pub use dns_record::{RData, RecordClass, RecordType, ResourceRecord};
pub use domain_name::DomainName;
pub use errors::{CodecError, DomainError};
