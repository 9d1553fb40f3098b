//! Decoding of DNS resource records from wire format.
//!
//! A [`Cursor`] wraps one complete message. [`Descriptor::read`] reads the
//! envelope of a record and [`ResourceRecord::decode_body`] decodes its RDATA,
//! failing with [`ParserError::RecordDesync`] when a decoder does not end
//! exactly on the declared rdlength.

pub mod config;
pub mod parser;
pub use config::*;
pub use parser::*;
