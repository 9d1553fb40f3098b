use crate::{Name, ParserError};
use std::net::{Ipv4Addr, Ipv6Addr};

pub const DEFAULT_MAX_POINTER_HOPS: usize = 16;

/// A read position into one DNS message.
///
/// Reads are bounds checked and leave the offset untouched when they fail.
/// Names are resolved against the whole message, so the cursor must always
/// wrap the complete message and not just a record.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    message: &'a [u8],
    offset: usize,
    max_pointer_hops: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(message: &'a [u8]) -> Self {
        Self {
            message,
            offset: 0,
            max_pointer_hops: DEFAULT_MAX_POINTER_HOPS,
        }
    }

    pub fn with_max_pointer_hops(mut self, hops: usize) -> Self {
        self.max_pointer_hops = hops;
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_offset(&mut self, offset: usize) -> Result<(), ParserError> {
        if offset > self.message.len() {
            return Err(ParserError::UnexpectedEOP {
                offset: self.message.len(),
                needed: offset - self.message.len(),
            });
        }

        self.offset = offset;
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.message.len() - self.offset
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ParserError> {
        let data = self
            .message
            .get(self.offset..self.offset + len)
            .ok_or(ParserError::UnexpectedEOP {
                offset: self.offset,
                needed: len,
            })?;

        self.offset += len;
        Ok(data)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), ParserError> {
        self.read_bytes(len).map(|_| ())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ParserError> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, ParserError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, ParserError> {
        self.read_array().map(u16::from_be_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, ParserError> {
        self.read_array().map(u32::from_be_bytes)
    }

    pub fn read_ipv4(&mut self) -> Result<Ipv4Addr, ParserError> {
        self.read_array::<4>().map(Ipv4Addr::from)
    }

    pub fn read_ipv6(&mut self) -> Result<Ipv6Addr, ParserError> {
        self.read_array::<16>().map(Ipv6Addr::from)
    }

    /// Reads a `<character-string>`: one length octet followed by that many
    /// octets.
    pub fn read_character_string(&mut self) -> Result<&'a [u8], ParserError> {
        let start = self.offset;
        let len = self.read_u8()? as usize;

        self.read_bytes(len).map_err(|e| {
            self.offset = start;
            e
        })
    }

    pub fn read_name(&mut self) -> Result<Name, ParserError> {
        let (name, end) = Name::read(self.message, self.offset, self.max_pointer_hops)?;
        self.offset = end;

        Ok(name)
    }
}
