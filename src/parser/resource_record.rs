use crate::{Cursor, Name, ParserError, RData};
use log::{trace, warn};
use std::fmt;

/// The envelope in front of every record's RDATA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: Name,
    pub rtype: Type,
    /// For OPT this is the requester's UDP payload size, not a class.
    pub class: Class,
    /// The wire value is an unsigned 32 bit integer. It is stored as its
    /// 2's-complement reinterpretation, so values above `i32::MAX` become
    /// negative. [`Descriptor::ttl_raw`] gives back the wire value.
    ///
    /// For OPT this holds the packed extended RCODE, version and flags.
    pub ttl: i32,
    pub rdlength: u16,
}

impl Descriptor {
    /// Reads name, type, class, TTL and rdlength, leaving the cursor at the
    /// start of RDATA.
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let name = cursor.read_name()?;
        let rtype = Type::from(cursor.read_u16()?);
        let class = Class::from(cursor.read_u16()?);
        let ttl = cursor.read_u32()? as i32;
        let rdlength = cursor.read_u16()?;

        trace!(
            "descriptor name = {} type = {} class = {} ttl = {} rdlength = {}",
            name,
            rtype,
            class,
            ttl,
            rdlength
        );

        Ok(Self {
            name,
            rtype,
            class,
            ttl,
            rdlength,
        })
    }

    pub fn ttl_raw(&self) -> u32 {
        self.ttl as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub descriptor: Descriptor,
    pub rdata: RData,
}

impl ResourceRecord {
    /// Reads one complete record at the cursor.
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let descriptor = Descriptor::read(cursor)?;
        Self::decode_body(descriptor, cursor)
    }

    /// Decodes the RDATA described by `descriptor`, with the cursor at its
    /// first byte.
    ///
    /// On success the cursor has moved by exactly `rdlength` bytes. Any other
    /// outcome is a [`ParserError::RecordDesync`], after which the rest of the
    /// message must be discarded.
    pub fn decode_body(
        descriptor: Descriptor,
        cursor: &mut Cursor<'_>,
    ) -> Result<Self, ParserError> {
        let start = cursor.offset();
        let rdata = RData::parse(&descriptor, cursor)?;

        let expected_end = start + descriptor.rdlength as usize;
        let actual_end = cursor.offset();
        if actual_end != expected_end {
            warn!(
                "{} record {} consumed {} bytes of rdata, rdlength is {}",
                descriptor.rtype,
                descriptor.name,
                actual_end as isize - start as isize,
                descriptor.rdlength
            );

            return Err(ParserError::RecordDesync {
                rtype: descriptor.rtype,
                expected_end,
                actual_end,
            });
        }

        trace!("decoded {:?}", rdata);

        Ok(Self { descriptor, rdata })
    }

    pub fn name(&self) -> &Name {
        &self.descriptor.name
    }

    pub fn rtype(&self) -> Type {
        self.descriptor.rtype
    }

    pub fn ttl(&self) -> i32 {
        self.descriptor.ttl
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.descriptor;

        write!(
            f,
            "{} {} {} {} {}",
            d.name.fqdn(),
            d.ttl_raw(),
            d.class,
            d.rtype,
            self.rdata
        )
    }
}

macro_rules! codes {
    ($(#[$attr:meta])* $name:ident, $unknown:literal { $($variant:ident = $code:literal,)* }) => {
        $(#[$attr])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
            Unknown(u16),
        }

        impl $name {
            pub fn code(self) -> u16 {
                match self {
                    $($name::$variant => $code,)*
                    $name::Unknown(v) => v,
                }
            }
        }

        impl From<u16> for $name {
            fn from(v: u16) -> Self {
                match v {
                    $($code => $name::$variant,)*
                    v => $name::Unknown(v),
                }
            }
        }

        impl From<$name> for u16 {
            fn from(v: $name) -> Self {
                v.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($name::$variant => f.write_str(stringify!($variant)),)*
                    $name::Unknown(v) => write!(f, concat!($unknown, "{}"), v),
                }
            }
        }
    };
}

codes!(
    /// Record type codes. Codes without a variant are carried in `Unknown`
    /// and round trip unchanged.
    #[allow(clippy::upper_case_acronyms)]
    Type, "TYPE" {
        A = 1,
        NS = 2,
        CNAME = 5,
        SOA = 6,
        MB = 7,
        MG = 8,
        MR = 9,
        NULL = 10,
        WKS = 11,
        PTR = 12,
        HINFO = 13,
        MINFO = 14,
        MX = 15,
        TXT = 16,
        RP = 17,
        AFSDB = 18,
        AAAA = 28,
        SRV = 33,
        OPT = 41,
        CAA = 257,
    }
);

codes!(
    #[allow(clippy::upper_case_acronyms)]
    Class, "CLASS" {
        IN = 1,
        CS = 2,
        CH = 3,
        HS = 4,
        NONE = 254,
        ANY = 255,
    }
);
