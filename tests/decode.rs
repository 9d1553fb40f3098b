use rrdecode::{Class, Cursor, Descriptor, ParserError, RData, ResourceRecord, Type};
use std::net::{Ipv4Addr, Ipv6Addr};

const SENTINEL: &[u8] = b"\xde\xad\xbe\xef";

fn name(dotted: &str) -> Vec<u8> {
    let mut out = vec![];
    for label in dotted.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend(label.as_bytes());
    }
    out.push(0);
    out
}

fn string(s: &[u8]) -> Vec<u8> {
    let mut out = vec![s.len() as u8];
    out.extend(s);
    out
}

/// A full record with an explicit rdlength, followed by the sentinel.
fn record_with_len(owner: &str, rtype: u16, ttl: u32, rdlength: u16, rdata: &[u8]) -> Vec<u8> {
    let mut out = name(owner);
    out.extend(rtype.to_be_bytes());
    out.extend(1u16.to_be_bytes());
    out.extend(ttl.to_be_bytes());
    out.extend(rdlength.to_be_bytes());
    out.extend(rdata);
    out.extend(SENTINEL);
    out
}

fn record(rtype: u16, rdata: &[u8]) -> Vec<u8> {
    record_with_len("example.com", rtype, 300, rdata.len() as u16, rdata)
}

/// Decodes the one record in `msg` and checks the cursor stopped on the
/// sentinel.
fn decode(msg: &[u8]) -> ResourceRecord {
    let mut cursor = Cursor::new(msg);
    let rr = ResourceRecord::parse(&mut cursor).unwrap();

    assert_eq!(cursor.offset(), msg.len() - SENTINEL.len());
    assert_eq!(cursor.read_bytes(SENTINEL.len()).unwrap(), SENTINEL);
    rr
}

fn decode_err(msg: &[u8]) -> ParserError {
    ResourceRecord::parse(&mut Cursor::new(msg)).unwrap_err()
}

#[test]
fn a_record() {
    let msg = record(1, &[192, 0, 2, 1]);

    let mut cursor = Cursor::new(&msg);
    let descriptor = Descriptor::read(&mut cursor).unwrap();
    let start = cursor.offset();
    let rr = ResourceRecord::decode_body(descriptor, &mut cursor).unwrap();

    assert_eq!(cursor.offset(), start + 4);
    assert_eq!(rr.descriptor.class, Class::IN);
    assert_eq!(rr.ttl(), 300);
    assert_eq!(
        rr.rdata,
        RData::A(rrdecode::rdata::a::Record {
            address: Ipv4Addr::new(192, 0, 2, 1)
        })
    );
    assert_eq!(rr.to_string(), "example.com. 300 IN A 192.0.2.1");
}

#[test]
fn aaaa_record() {
    let addr: Ipv6Addr = "2001:db8::1".parse().unwrap();
    let rr = decode(&record(28, &addr.octets()));

    match rr.rdata {
        RData::Aaaa(r) => assert_eq!(r.address, addr),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn single_name_records() {
    for (code, rtype) in [
        (2, Type::NS),
        (5, Type::CNAME),
        (7, Type::MB),
        (8, Type::MG),
        (9, Type::MR),
        (12, Type::PTR),
    ] {
        let rr = decode(&record(code, &name("target.example.net")));
        assert_eq!(rr.rtype(), rtype);

        let target = match &rr.rdata {
            RData::Ns(r) | RData::Cname(r) | RData::Mb(r) | RData::Mg(r) | RData::Mr(r)
            | RData::Ptr(r) => &r.domain_name,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(target.to_string(), "target.example.net");
    }
}

#[test]
fn soa_record() {
    let mut rdata = name("ns1.example.com");
    rdata.extend(name("admin.example.com"));
    for v in [2024010100u32, 3600, 900, 604800, 300] {
        rdata.extend(v.to_be_bytes());
    }

    let rr = decode(&record(6, &rdata));
    let RData::Soa(soa) = rr.rdata else {
        panic!("not an SOA");
    };

    assert_eq!(soa.m_name.to_string(), "ns1.example.com");
    assert_eq!(soa.r_name.to_string(), "admin.example.com");
    assert_eq!(soa.serial, 2024010100);
    assert_eq!(soa.refresh, 3600);
    assert_eq!(soa.retry, 900);
    assert_eq!(soa.expire, 604800);
    assert_eq!(soa.minimum, 300);
}

#[test]
fn null_record() {
    let rr = decode(&record(10, b"\x00\x01opaque"));

    assert_eq!(
        rr.rdata,
        RData::Null(rrdecode::rdata::null::Record {
            data: b"\x00\x01opaque".to_vec()
        })
    );
}

#[test]
fn wks_record() {
    let rr = decode(&record(11, &[10, 0, 0, 1, 6, 0, 0, 0x02]));

    let RData::Wks(wks) = rr.rdata else {
        panic!("not a WKS");
    };
    assert_eq!(wks.address, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(wks.protocol, 6);
    assert_eq!(wks.bitmap, vec![0, 0, 0x02]);
}

#[test]
fn wks_without_protocol_is_rejected() {
    let msg = record_with_len("example.com", 11, 300, 4, &[10, 0, 0, 1]);

    assert_eq!(
        decode_err(&msg),
        ParserError::InvalidLength {
            rtype: Type::WKS,
            rdlength: 4,
            overhead: 5
        }
    );
}

#[test]
fn hinfo_record() {
    let mut rdata = string(b"x86_64");
    rdata.extend(string(b"Linux"));

    let rr = decode(&record(13, &rdata));
    assert_eq!(rr.to_string(), "example.com. 300 IN HINFO \"x86_64\" \"Linux\"");
}

#[test]
fn minfo_and_rp_records() {
    let mut rdata = name("list-owner.example.com");
    rdata.extend(name("errors.example.com"));

    let RData::Minfo(minfo) = decode(&record(14, &rdata)).rdata else {
        panic!("not a MINFO");
    };
    assert_eq!(minfo.r_mailbox.to_string(), "list-owner.example.com");
    assert_eq!(minfo.e_mailbox.to_string(), "errors.example.com");

    let mut rdata = name("hostmaster.example.com");
    rdata.push(0);

    let RData::Rp(rp) = decode(&record(17, &rdata)).rdata else {
        panic!("not an RP");
    };
    assert_eq!(rp.mbox.to_string(), "hostmaster.example.com");
    assert!(rp.txt_domain.is_root());
}

#[test]
fn mx_afsdb_srv_records() {
    let mut rdata = 10u16.to_be_bytes().to_vec();
    rdata.extend(name("mail.example.com"));
    let rr = decode(&record(15, &rdata));
    assert_eq!(rr.to_string(), "example.com. 300 IN MX 10 mail.example.com.");

    let mut rdata = 1u16.to_be_bytes().to_vec();
    rdata.extend(name("afs.example.com"));
    let rr = decode(&record(18, &rdata));
    assert_eq!(rr.to_string(), "example.com. 300 IN AFSDB 1 afs.example.com.");

    let mut rdata = vec![];
    for v in [0u16, 5, 5060] {
        rdata.extend(v.to_be_bytes());
    }
    rdata.extend(name("sip.example.com"));
    let RData::Srv(srv) = decode(&record(33, &rdata)).rdata else {
        panic!("not an SRV");
    };
    assert_eq!((srv.priority, srv.weight, srv.port), (0, 5, 5060));
    assert_eq!(srv.target.to_string(), "sip.example.com");
}

#[test]
fn txt_entries_keep_both_forms() {
    let strings: [&[u8]; 3] = [b"v=spf1 include:_spf.example.com ~all", b"", b"key=value"];
    let rdata = strings.iter().flat_map(|s| string(s)).collect::<Vec<_>>();

    let RData::Txt(txt) = decode(&record(16, &rdata)).rdata else {
        panic!("not a TXT");
    };

    assert_eq!(txt.entries.len(), strings.len());
    for (entry, original) in txt.entries.iter().zip(strings) {
        assert_eq!(entry.escaped.as_bytes(), original);
        assert_eq!(entry.utf8.as_bytes(), original);
    }
}

#[test]
fn txt_overrun_is_a_desync() {
    // rdlength covers "\x03abc" but the second entry claims 4 bytes
    let mut rdata = string(b"abc");
    rdata.extend(b"\x04wxyz");
    let msg = record_with_len("example.com", 16, 300, 6, &rdata);
    let rdata_start = name("example.com").len() + 10;

    assert_eq!(
        decode_err(&msg),
        ParserError::RecordDesync {
            rtype: Type::TXT,
            expected_end: rdata_start + 6,
            actual_end: rdata_start + 9,
        }
    );
}

#[test]
fn txt_overrun_at_end_of_message_is_a_desync() {
    // last record in the message; its second entry claims 5 bytes of a 4 byte rdata
    let mut msg = vec![0];
    msg.extend(16u16.to_be_bytes());
    msg.extend(1u16.to_be_bytes());
    msg.extend(300u32.to_be_bytes());
    msg.extend(4u16.to_be_bytes());
    msg.extend(b"\x02ab\x05x");

    assert_eq!(
        decode_err(&msg),
        ParserError::RecordDesync {
            rtype: Type::TXT,
            expected_end: 15,
            actual_end: 20,
        }
    );
}

#[test]
fn opt_record_skips_options() {
    let mut msg = vec![0];
    msg.extend(41u16.to_be_bytes());
    msg.extend(1232u16.to_be_bytes());
    msg.extend(0x0000_8000u32.to_be_bytes());
    msg.extend(8u16.to_be_bytes());
    // one cookie option, not decoded here
    msg.extend(b"\x00\x0a\x00\x04\x01\x02\x03\x04");
    msg.extend(SENTINEL);

    let rr = decode(&msg);
    assert_eq!(rr.name().to_string(), ".");

    let RData::Opt(opt) = rr.rdata else {
        panic!("not an OPT");
    };
    assert_eq!(opt.udp_payload_size(), 1232);
    assert_eq!(opt.version(), 0);
    assert!(opt.dnssec_ok());
    assert_eq!(opt.options_len(), 8);
}

#[test]
fn caa_record() {
    let mut rdata = vec![0];
    rdata.extend(string(b"issue"));
    rdata.extend(b"ca.example.net");

    let rr = decode(&record(257, &rdata));
    assert_eq!(rr.to_string(), "example.com. 300 IN CAA 0 issue \"ca.example.net\"");
}

#[test]
fn caa_tag_longer_than_rdata() {
    let mut rdata = vec![0];
    rdata.extend(string(b"issuewild"));
    let msg = record_with_len("example.com", 257, 300, 6, &rdata);

    assert_eq!(
        decode_err(&msg),
        ParserError::InvalidLength {
            rtype: Type::CAA,
            rdlength: 6,
            overhead: 11
        }
    );
}

#[test]
fn unknown_type_is_skipped() {
    let msg = record(9999, b"\x01\x02\x03\x04\x05\x06\x07");

    let mut cursor = Cursor::new(&msg);
    let descriptor = Descriptor::read(&mut cursor).unwrap();
    let start = cursor.offset();
    let rr = ResourceRecord::decode_body(descriptor, &mut cursor).unwrap();

    assert_eq!(cursor.offset() - start, 7);
    assert_eq!(rr.rtype(), Type::Unknown(9999));
    assert_eq!(rr.rdata, RData::Empty);
}

#[test]
fn short_a_rdlength_is_a_desync() {
    let msg = record_with_len("example.com", 1, 300, 3, &[192, 0, 2, 1]);

    assert!(matches!(
        decode_err(&msg),
        ParserError::RecordDesync {
            rtype: Type::A,
            ..
        }
    ));
}

#[test]
fn truncated_rdata_propagates_eop() {
    let mut msg = name("example.com");
    msg.extend(28u16.to_be_bytes());
    msg.extend(1u16.to_be_bytes());
    msg.extend(300u32.to_be_bytes());
    msg.extend(16u16.to_be_bytes());
    msg.extend([0x20, 0x01, 0x0d, 0xb8]);

    assert!(matches!(
        decode_err(&msg),
        ParserError::UnexpectedEOP { needed: 16, .. }
    ));
}

#[test]
fn large_ttl_wraps_to_negative() {
    let msg = record_with_len("example.com", 1, 0x8000_0000, 4, &[192, 0, 2, 1]);
    let rr = decode(&msg);

    assert_eq!(rr.ttl(), i32::MIN);
    assert_eq!(rr.descriptor.ttl_raw(), 0x8000_0000);
}

#[test]
fn compressed_records_in_sequence() {
    // two MX records; the second owner and exchange point back into the first
    let mut msg = name("example.com");
    msg.extend(15u16.to_be_bytes());
    msg.extend(1u16.to_be_bytes());
    msg.extend(300u32.to_be_bytes());
    let mut rdata = 10u16.to_be_bytes().to_vec();
    rdata.extend(b"\x04mail\xc0\x00");
    msg.extend((rdata.len() as u16).to_be_bytes());
    msg.extend(&rdata);

    msg.extend(b"\xc0\x00");
    msg.extend(15u16.to_be_bytes());
    msg.extend(1u16.to_be_bytes());
    msg.extend(300u32.to_be_bytes());
    let mut rdata = 20u16.to_be_bytes().to_vec();
    rdata.extend(b"\x05mail2\xc0\x00");
    msg.extend((rdata.len() as u16).to_be_bytes());
    msg.extend(&rdata);
    msg.extend(SENTINEL);

    let mut cursor = Cursor::new(&msg);
    let first = ResourceRecord::parse(&mut cursor).unwrap();
    let second = ResourceRecord::parse(&mut cursor).unwrap();

    assert_eq!(first.to_string(), "example.com. 300 IN MX 10 mail.example.com.");
    assert_eq!(second.to_string(), "example.com. 300 IN MX 20 mail2.example.com.");
    assert_eq!(cursor.read_bytes(SENTINEL.len()).unwrap(), SENTINEL);
}
