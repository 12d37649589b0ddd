use berth_dns_domain::{DomainError, RecordType};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::IpAddr;

/// Synthesizes the address records answered from local state.
pub struct AnswerBuilder;

impl AnswerBuilder {
    /// `<name> <ttl> IN <record_type> <address>`
    ///
    /// `name` is used exactly as it appeared in the question, case included.
    /// Labels longer than 63 octets cannot be encoded and are rejected. The
    /// address family has to fit the record type: an IPv6 address cannot
    /// become an `A` record and vice versa.
    pub fn address_record(
        name: &str,
        record_type: RecordType,
        address: IpAddr,
        ttl: u32,
    ) -> Result<Record, DomainError> {
        let owner = Name::from_ascii(name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })?;

        let rdata = match (record_type, address) {
            (RecordType::A, IpAddr::V4(ipv4)) => RData::A(A(ipv4)),
            (RecordType::AAAA, IpAddr::V6(ipv6)) => RData::AAAA(AAAA(ipv6)),
            _ => {
                return Err(DomainError::AddressFamilyMismatch {
                    record_type: record_type.to_string(),
                    address: address.to_string(),
                })
            }
        };

        Ok(Record::from_rdata(owner, ttl, rdata))
    }
}
