//! Conversions of raw `<character-string>` octets into Rust strings.

/// Renders octets in presentation format: printable ASCII as is, `"` and `\`
/// with a backslash, everything else as a `\DDD` decimal escape.
pub fn escape(octets: &[u8]) -> String {
    let mut out = String::with_capacity(octets.len());

    for &ch in octets {
        match ch {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(ch as char);
            }
            0x20..=0x7e => out.push(ch as char),
            _ => out.push_str(&format!("\\{:03}", ch)),
        }
    }

    out
}

/// Decodes octets as UTF-8, replacing invalid sequences with U+FFFD.
pub fn utf8(octets: &[u8]) -> String {
    String::from_utf8_lossy(octets).into_owned()
}
