use crate::{Cursor, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub data: Vec<u8>,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        let data = cursor.read_bytes(rdlength as usize)?.to_vec();

        Ok(Self { data })
    }
}
