use crate::Type;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParserError {
    #[error("Unexpected end of packet: needed {needed} bytes at offset {offset}")]
    UnexpectedEOP { offset: usize, needed: usize },

    #[error("Label is not UTF-8")]
    LabelIsNotUTF8,

    #[error("Compression pointer at offset {at} points outside the message ({target})")]
    BadPointer { at: usize, target: usize },

    #[error("More than {0} compression pointers followed while reading a name")]
    PointerLoop(usize),

    #[error("Reserved label type 0x{0:02x}")]
    BadLabelType(u8),

    #[error("Domain name exceeds 255 octets")]
    NameTooLong,

    #[error("{rtype} rdlength {rdlength} is shorter than its fixed overhead of {overhead} bytes")]
    InvalidLength {
        rtype: Type,
        rdlength: u16,
        overhead: usize,
    },

    /// The body decoder did not stop on the byte boundary declared by rdlength.
    /// The rest of the message can not be trusted after this.
    #[error("{rtype} record desync: expected to end at offset {expected_end}, ended at {actual_end}")]
    RecordDesync {
        rtype: Type,
        expected_end: usize,
        actual_end: usize,
    },
}
