//! Mapping between `berth_dns_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Both sides are keyed by the numeric type code, so the mapping is total in
//! both directions: types without a name on our side travel as `Unknown(code)`.

use berth_dns_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Domain type → hickory type (for building upstream queries).
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Hickory type → domain type (for inbound questions).
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
