use crate::{Cursor, ParserError, Type};
use std::net::Ipv4Addr;

/// Address and protocol in front of the bitmap.
const FIXED_LEN: usize = 5;

/// Bitmap octets that can name a port; bits past port 65535 are ignored.
const PORT_OCTETS: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: Ipv4Addr,
    /// IP protocol number, 6 for TCP and 17 for UDP.
    pub protocol: u8,
    /// Bit `n` (most significant bit first) is set when port `n` is served.
    pub bitmap: Vec<u8>,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        let bitmap_len = (rdlength as usize)
            .checked_sub(FIXED_LEN)
            .ok_or(ParserError::InvalidLength {
                rtype: Type::WKS,
                rdlength,
                overhead: FIXED_LEN,
            })?;

        let address = cursor.read_ipv4()?;
        let protocol = cursor.read_u8()?;
        let bitmap = cursor.read_bytes(bitmap_len)?.to_vec();

        Ok(Self {
            address,
            protocol,
            bitmap,
        })
    }

    pub fn ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.bitmap.iter().take(PORT_OCTETS).enumerate().flat_map(|(i, byte)| {
            (0..8u16)
                .filter(move |bit| *byte & (0x80 >> *bit) != 0)
                .map(move |bit| i as u16 * 8 + bit)
        })
    }
}
