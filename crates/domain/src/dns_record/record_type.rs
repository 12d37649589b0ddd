use std::fmt;
use std::str::FromStr;

/// Query type of a DNS question.
///
/// Only `A` and `AAAA` take part in local resolution; every other type,
/// including codes this enum has no name for, is forwarded upstream as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,
    SRV,
    SOA,
    NS,
    CAA,
    SVCB,
    HTTPS,
    ANY,

    Unknown(u16),
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::ANY => 255,
            RecordType::CAA => 257,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            33 => RecordType::SRV,
            64 => RecordType::SVCB,
            65 => RecordType::HTTPS,
            255 => RecordType::ANY,
            257 => RecordType::CAA,
            other => RecordType::Unknown(other),
        }
    }

    /// `A` or `AAAA`, the only types answered from local state.
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::CNAME => f.write_str("CNAME"),
            RecordType::MX => f.write_str("MX"),
            RecordType::TXT => f.write_str("TXT"),
            RecordType::PTR => f.write_str("PTR"),
            RecordType::SRV => f.write_str("SRV"),
            RecordType::SOA => f.write_str("SOA"),
            RecordType::NS => f.write_str("NS"),
            RecordType::CAA => f.write_str("CAA"),
            RecordType::SVCB => f.write_str("SVCB"),
            RecordType::HTTPS => f.write_str("HTTPS"),
            RecordType::ANY => f.write_str("ANY"),
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "PTR" => Ok(RecordType::PTR),
            "SRV" => Ok(RecordType::SRV),
            "SOA" => Ok(RecordType::SOA),
            "NS" => Ok(RecordType::NS),
            "CAA" => Ok(RecordType::CAA),
            "SVCB" => Ok(RecordType::SVCB),
            "HTTPS" => Ok(RecordType::HTTPS),
            "ANY" => Ok(RecordType::ANY),
            _ => upper
                .strip_prefix("TYPE")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordType::from_u16)
                .ok_or_else(|| format!("Unknown record type: {}", s)),
        }
    }
}
