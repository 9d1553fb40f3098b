use crate::{text, Cursor, ParserError, Type};

/// Flag and tag length octets.
const FIXED_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub flag: u8,
    pub tag: String,
    pub value: String,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        let invalid = |overhead| ParserError::InvalidLength {
            rtype: Type::CAA,
            rdlength,
            overhead,
        };

        if (rdlength as usize) < FIXED_LEN {
            return Err(invalid(FIXED_LEN));
        }

        let flag = cursor.read_u8()?;
        let tag = cursor.read_character_string()?;

        let overhead = FIXED_LEN + tag.len();
        let value_len = (rdlength as usize)
            .checked_sub(overhead)
            .ok_or_else(|| invalid(overhead))?;
        let value = cursor.read_bytes(value_len)?;

        Ok(Self {
            flag,
            tag: text::utf8(tag),
            value: text::utf8(value),
        })
    }

    /// Issuer critical flag: a CA that does not understand the tag must not
    /// issue.
    pub fn critical(&self) -> bool {
        self.flag & 0x80 != 0
    }
}
