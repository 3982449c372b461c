pub mod resolver;
pub mod transport;
pub mod wire;

pub use resolver::StubResolver;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
