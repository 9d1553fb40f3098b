use crate::{text, Cursor, ParserError, Type};

/// One `<character-string>` of a TXT record, decoded both ways up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Presentation format, safe to print.
    pub escaped: String,
    pub utf8: String,
}

impl Entry {
    fn new(octets: &[u8]) -> Self {
        Self {
            escaped: text::escape(octets),
            utf8: text::utf8(octets),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub entries: Vec<Entry>,
}

impl Record {
    /// Reads character strings until `rdlength` bytes are used up. A length
    /// octet that claims more than what is left of rdlength is a desync, even
    /// when the message ends before that many bytes.
    pub fn parse(cursor: &mut Cursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        let start = cursor.offset();
        let end = start + rdlength as usize;
        let mut entries = vec![];

        while cursor.offset() < end {
            let entry_start = cursor.offset();
            let len = cursor.read_u8()? as usize;

            if entry_start + 1 + len > end {
                return Err(ParserError::RecordDesync {
                    rtype: Type::TXT,
                    expected_end: end,
                    actual_end: entry_start + 1 + len,
                });
            }

            entries.push(Entry::new(cursor.read_bytes(len)?));
        }

        Ok(Self { entries })
    }

    /// The UTF-8 entries joined together, as SPF and DKIM expect.
    pub fn concatenated(&self) -> String {
        self.entries.iter().map(|e| e.utf8.as_str()).collect()
    }
}
