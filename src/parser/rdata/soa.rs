use crate::{Cursor, Name, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Primary name server of the zone.
    pub m_name: Name,
    /// Mailbox of the person responsible for the zone.
    pub r_name: Name,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let m_name = cursor.read_name()?;
        let r_name = cursor.read_name()?;
        let serial = cursor.read_u32()?;
        let refresh = cursor.read_u32()?;
        let retry = cursor.read_u32()?;
        let expire = cursor.read_u32()?;
        let minimum = cursor.read_u32()?;

        Ok(Self {
            m_name,
            r_name,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        })
    }
}
