pub mod cursor;
pub mod error;
pub mod qname;
pub mod rdata;
pub mod resource_record;
pub mod text;

pub use cursor::*;
pub use error::*;
pub use qname::*;
pub use rdata::RData;
pub use resource_record::*;
