//! DNS Message Builder
//!
//! Builds the upstream query for one delegated question: fresh random ID,
//! RD set, a single `IN` question carrying the name and type unchanged.

use super::record_type_map::RecordTypeMapper;
use berth_dns_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Message ID and serialized query bytes for `query`.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_ascii(&query.name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.name, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type));
        question.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::MessageEncoding(e.to_string()))?;

        Ok(buf)
    }
}
