use crate::{Cursor, Name, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1 for an AFS cell database server, 2 for a DCE authenticated name server.
    pub subtype: u16,
    pub hostname: Name,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let subtype = cursor.read_u16()?;
        let hostname = cursor.read_name()?;

        Ok(Self { subtype, hostname })
    }
}
