use crate::{Cursor, Name, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub preference: u16,
    pub exchange: Name,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let preference = cursor.read_u16()?;
        let exchange = cursor.read_name()?;

        Ok(Self {
            preference,
            exchange,
        })
    }
}
