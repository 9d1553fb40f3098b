use crate::{Cursor, ParserError};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: Ipv4Addr,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let address = cursor.read_ipv4()?;

        Ok(Self { address })
    }
}
