use crate::types::SchemeType;

/// Get the scheme type from a scheme string, ignoring ASCII case.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    // Perfect hash: filter by length first, then first byte, then full comparison
    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if bytes.eq_ignore_ascii_case(b"ws") => SchemeType::Ws,
        (3, Some(b'w')) if bytes.eq_ignore_ascii_case(b"wss") => SchemeType::Wss,
        (3, Some(b'f')) if bytes.eq_ignore_ascii_case(b"ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if bytes.eq_ignore_ascii_case(b"http") => SchemeType::Http,
        (4, Some(b'f')) if bytes.eq_ignore_ascii_case(b"file") => SchemeType::File,
        (5, Some(b'h')) if bytes.eq_ignore_ascii_case(b"https") => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    }
}
