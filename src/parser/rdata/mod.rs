pub mod a;
pub mod aaaa;
pub mod afsdb;
pub mod caa;
pub mod hinfo;
pub mod minfo;
pub mod mx;
pub mod null;
pub mod opt;
pub mod ptr;
pub mod rp;
pub mod soa;
pub mod srv;
pub mod txt;
pub mod wks;
use crate::{text, Cursor, Descriptor, ParserError, Type};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(a::Record),
    Ns(ptr::Record),
    Cname(ptr::Record),
    Soa(soa::Record),
    Mb(ptr::Record),
    Mg(ptr::Record),
    Mr(ptr::Record),
    Null(null::Record),
    Wks(wks::Record),
    Ptr(ptr::Record),
    Hinfo(hinfo::Record),
    Minfo(minfo::Record),
    Mx(mx::Record),
    Txt(txt::Record),
    Rp(rp::Record),
    Afsdb(afsdb::Record),
    Aaaa(aaaa::Record),
    Srv(srv::Record),
    Opt(opt::Record),
    Caa(caa::Record),

    /// A type this crate does not decode. Its RDATA was skipped.
    Empty,
}

impl RData {
    /// Decodes RDATA for `descriptor.rtype` starting at the cursor.
    ///
    /// This does not check that exactly rdlength bytes were used, see
    /// [`crate::ResourceRecord::decode_body`].
    pub fn parse(descriptor: &Descriptor, cursor: &mut Cursor<'_>) -> Result<Self, ParserError> {
        let rdlength = descriptor.rdlength;

        Ok(match descriptor.rtype {
            Type::A => RData::A(a::Record::parse(cursor)?),
            Type::NS => RData::Ns(ptr::Record::parse(cursor)?),
            Type::CNAME => RData::Cname(ptr::Record::parse(cursor)?),
            Type::SOA => RData::Soa(soa::Record::parse(cursor)?),
            Type::MB => RData::Mb(ptr::Record::parse(cursor)?),
            Type::MG => RData::Mg(ptr::Record::parse(cursor)?),
            Type::MR => RData::Mr(ptr::Record::parse(cursor)?),
            Type::NULL => RData::Null(null::Record::parse(cursor, rdlength)?),
            Type::WKS => RData::Wks(wks::Record::parse(cursor, rdlength)?),
            Type::PTR => RData::Ptr(ptr::Record::parse(cursor)?),
            Type::HINFO => RData::Hinfo(hinfo::Record::parse(cursor)?),
            Type::MINFO => RData::Minfo(minfo::Record::parse(cursor)?),
            Type::MX => RData::Mx(mx::Record::parse(cursor)?),
            Type::TXT => RData::Txt(txt::Record::parse(cursor, rdlength)?),
            Type::RP => RData::Rp(rp::Record::parse(cursor)?),
            Type::AFSDB => RData::Afsdb(afsdb::Record::parse(cursor)?),
            Type::AAAA => RData::Aaaa(aaaa::Record::parse(cursor)?),
            Type::SRV => RData::Srv(srv::Record::parse(cursor)?),
            Type::OPT => {
                // options are not decoded here
                cursor.skip(rdlength as usize)?;
                RData::Opt(opt::Record::new(descriptor))
            }
            Type::CAA => RData::Caa(caa::Record::parse(cursor, rdlength)?),
            Type::Unknown(code) => {
                debug!(
                    "skipping {} bytes of unknown type {} for {}",
                    rdlength, code, descriptor.name
                );
                cursor.skip(rdlength as usize)?;
                RData::Empty
            }
        })
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(r) => write!(f, "{}", r.address),
            RData::Aaaa(r) => write!(f, "{}", r.address),
            RData::Ns(r)
            | RData::Cname(r)
            | RData::Mb(r)
            | RData::Mg(r)
            | RData::Mr(r)
            | RData::Ptr(r) => f.write_str(&r.domain_name.fqdn()),
            RData::Soa(r) => write!(
                f,
                "{} {} {} {} {} {} {}",
                r.m_name.fqdn(),
                r.r_name.fqdn(),
                r.serial,
                r.refresh,
                r.retry,
                r.expire,
                r.minimum
            ),
            RData::Null(r) => {
                write!(f, "\\# {}", r.data.len())?;
                if !r.data.is_empty() {
                    f.write_str(" ")?;
                    for b in &r.data {
                        write!(f, "{:02x}", b)?;
                    }
                }
                Ok(())
            }
            RData::Wks(r) => {
                write!(f, "{} {}", r.address, r.protocol)?;
                for port in r.ports() {
                    write!(f, " {}", port)?;
                }
                Ok(())
            }
            RData::Hinfo(r) => write!(
                f,
                "\"{}\" \"{}\"",
                text::escape(r.cpu.as_bytes()),
                text::escape(r.os.as_bytes())
            ),
            RData::Minfo(r) => write!(f, "{} {}", r.r_mailbox.fqdn(), r.e_mailbox.fqdn()),
            RData::Mx(r) => write!(f, "{} {}", r.preference, r.exchange.fqdn()),
            RData::Txt(r) => {
                let entries = r
                    .entries
                    .iter()
                    .map(|e| format!("\"{}\"", e.escaped))
                    .collect::<Vec<_>>();
                f.write_str(&entries.join(" "))
            }
            RData::Rp(r) => write!(f, "{} {}", r.mbox.fqdn(), r.txt_domain.fqdn()),
            RData::Afsdb(r) => write!(f, "{} {}", r.subtype, r.hostname.fqdn()),
            RData::Srv(r) => write!(
                f,
                "{} {} {} {}",
                r.priority,
                r.weight,
                r.port,
                r.target.fqdn()
            ),
            RData::Opt(r) => write!(
                f,
                "udp={} rcode={} version={} flags=0x{:04x} options={}",
                r.udp_payload_size(),
                r.extended_rcode(),
                r.version(),
                r.flags(),
                r.options_len()
            ),
            RData::Caa(r) => write!(
                f,
                "{} {} \"{}\"",
                r.flag,
                r.tag,
                text::escape(r.value.as_bytes())
            ),
            RData::Empty => f.write_str("; not decoded"),
        }
    }
}
