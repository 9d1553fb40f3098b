use crate::{Cursor, ParserError};
use std::net::Ipv6Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: Ipv6Addr,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let address = cursor.read_ipv6()?;

        Ok(Self { address })
    }
}
