pub mod forwarding;
pub mod server;
pub mod transport;
pub mod upstream;

pub use forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use server::DnsServerHandler;
pub use transport::{DnsTransport, HttpsTransport, TransportResponse};
pub use upstream::DohUpstreamResolver;
