use berth_dns_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;

/// Decoded upstream reply. Only the answer section is relayed to clients.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
