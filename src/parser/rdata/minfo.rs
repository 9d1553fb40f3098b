use crate::{Cursor, Name, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Mailbox responsible for the mailing list.
    pub r_mailbox: Name,
    /// Mailbox that receives errors about the list.
    pub e_mailbox: Name,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let r_mailbox = cursor.read_name()?;
        let e_mailbox = cursor.read_name()?;

        Ok(Self {
            r_mailbox,
            e_mailbox,
        })
    }
}
