use crate::{Cursor, Name, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: Name,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let priority = cursor.read_u16()?;
        let weight = cursor.read_u16()?;
        let port = cursor.read_u16()?;
        let target = cursor.read_name()?;

        Ok(Self {
            priority,
            weight,
            port,
            target,
        })
    }
}
