//! Read-only byte classification tables shared by both parser machines.
//!
//! Every table is a `const` built at compile time, so lookups need no
//! initialization and no synchronization.

use crate::types::Strictness;

/// RFC 2616 token characters, lowercased. Zero marks a separator or CTL.
///
/// Space maps to itself here; [`token`] drops it in strict mode.
const TOKEN_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = i;
        table[(i - 0x20) as usize] = i;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = i;
        i += 1;
    }

    let extra = b" !#$%&'*+-.^_`|~";
    let mut j = 0;
    while j < extra.len() {
        table[extra[j] as usize] = extra[j];
        j += 1;
    }

    table
};

/// Set a bit in a 256-bit map.
const fn set_bit(mut map: [u8; 32], b: u8) -> [u8; 32] {
    map[(b >> 3) as usize] |= 1 << (b & 7);
    map
}

/// Printable ASCII except `#` and `?`, which the machine treats as
/// delimiters.
const STRICT_URL_CHAR: [u8; 32] = {
    let mut map = [0u8; 32];
    let mut b = 0x21u8;
    while b < 0x7f {
        if b != b'#' && b != b'?' {
            map = set_bit(map, b);
        }
        b += 1;
    }
    map
};

/// Strict set plus horizontal tab and form feed.
const LENIENT_URL_CHAR: [u8; 32] = set_bit(set_bit(STRICT_URL_CHAR, b'\t'), 0x0c);

const UNHEX_TABLE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0u8;
    while i < 10 {
        table[(b'0' + i) as usize] = i as i8;
        i += 1;
    }
    let mut i = 0u8;
    while i < 6 {
        table[(b'a' + i) as usize] = 10 + i as i8;
        table[(b'A' + i) as usize] = 10 + i as i8;
        i += 1;
    }
    table
};

fn bit_at(map: &[u8; 32], b: u8) -> bool {
    map[(b >> 3) as usize] & (1 << (b & 7)) != 0
}

/// Bytes that may appear in a path, query or fragment.
pub fn is_url_char(b: u8, strictness: Strictness) -> bool {
    match strictness {
        Strictness::Strict => bit_at(&STRICT_URL_CHAR, b),
        Strictness::Lenient => bit_at(&LENIENT_URL_CHAR, b) || b & 0x80 != 0,
    }
}

/// RFC 3986 "mark" characters.
pub fn is_mark(b: u8) -> bool {
    matches!(
        b,
        b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
    )
}

/// Bytes allowed in userinfo and, by extension, anywhere in an authority.
pub fn is_userinfo_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || is_mark(b)
        || matches!(b, b'%' | b';' | b':' | b'&' | b'=' | b'+' | b'$' | b',')
}

/// Bytes allowed in a registered name or IPv4 host.
pub fn is_host_char(b: u8, strictness: Strictness) -> bool {
    b.is_ascii_alphanumeric()
        || b == b'.'
        || b == b'-'
        || (b == b'_' && strictness == Strictness::Lenient)
}

/// Lowercased token byte, or `None` for separators and control bytes.
pub fn token(b: u8, strictness: Strictness) -> Option<u8> {
    if b == b' ' && strictness == Strictness::Strict {
        return None;
    }
    match TOKEN_TABLE[b as usize] {
        0 => None,
        t => Some(t),
    }
}

/// Value of a hexadecimal digit.
pub fn unhex(b: u8) -> Option<u8> {
    u8::try_from(UNHEX_TABLE[b as usize]).ok()
}

/// Bytes that kill the URL machine before any state is consulted.
pub(crate) fn is_forbidden(b: u8, strictness: Strictness) -> bool {
    match b {
        b' ' | b'\r' | b'\n' => true,
        b'\t' | 0x0c => strictness == Strictness::Strict,
        _ => false,
    }
}
