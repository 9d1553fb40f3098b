use crate::{Cursor, Name, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub mbox: Name,
    /// Name of a TXT record with more information, or the root.
    pub txt_domain: Name,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let mbox = cursor.read_name()?;
        let txt_domain = cursor.read_name()?;

        Ok(Self { mbox, txt_domain })
    }
}
