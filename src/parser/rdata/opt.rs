use crate::Descriptor;

/// The EDNS(0) pseudo record.
///
/// OPT reuses the envelope: the class field carries the requester's UDP
/// payload size and the TTL carries the extended RCODE, the version and the
/// flags. The values here are those bit patterns, not a class or a TTL. The
/// options blob itself is skipped and left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    udp_payload_size: u16,
    /// The raw TTL field: extended RCODE, version, then 16 bits of flags.
    packed: u32,
    options_len: u16,
}

impl Record {
    pub fn new(descriptor: &Descriptor) -> Self {
        Self {
            udp_payload_size: descriptor.class.code(),
            packed: descriptor.ttl_raw(),
            options_len: descriptor.rdlength,
        }
    }

    pub fn udp_payload_size(&self) -> u16 {
        self.udp_payload_size
    }

    /// Size of the options blob that follows in RDATA.
    pub fn options_len(&self) -> u16 {
        self.options_len
    }

    /// Upper eight bits of the 12 bit extended RCODE.
    pub fn extended_rcode(&self) -> u8 {
        (self.packed >> 24) as u8
    }

    pub fn version(&self) -> u8 {
        (self.packed >> 16) as u8
    }

    pub fn flags(&self) -> u16 {
        self.packed as u16
    }

    /// DNSSEC OK.
    pub fn dnssec_ok(&self) -> bool {
        self.flags() & 0x8000 != 0
    }
}
