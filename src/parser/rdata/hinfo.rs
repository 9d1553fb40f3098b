use crate::{text, Cursor, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub cpu: String,
    pub os: String,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let cpu = text::utf8(cursor.read_character_string()?);
        let os = text::utf8(cursor.read_character_string()?);

        Ok(Self { cpu, os })
    }
}
