pub mod header;
pub mod message;
pub mod question;

pub use header::{HeaderFlags, MessageHeader, Opcode, ResponseCode, HEADER_LEN};
pub use message::Message;
pub use question::Question;
