//! DNS wire format codec (RFC 1035 §4.1)
//!
//! Hand-rolled encoder and decoder for the small subset the stub resolver
//! needs: one A/IN question out, header + question echo + answer records back.
//! Every read goes through [`WireReader`], so no decode path can index past
//! the end of the buffer.

pub mod cursor;
pub mod header;
pub mod name;
pub mod query_builder;
pub mod reply_parser;

pub use cursor::WireReader;
pub use header::{read_header, write_header};
pub use name::{decode_name, encode_name, read_name, write_name};
pub use query_builder::{build_query, build_query_with_random_id};
pub use reply_parser::{parse_header, parse_message, read_question, read_record};

/// Largest UDP payload exchanged without EDNS(0).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;
