//! Records whose RDATA is a single domain name: NS, CNAME, MB, MG, MR and PTR.

use crate::{Cursor, Name, ParserError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub domain_name: Name,
}

impl Record {
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let domain_name = cursor.read_name()?;

        Ok(Self { domain_name })
    }
}
