/// Convert a run of ASCII digits to a port number.
///
/// The value is checked against `u16::MAX` after every digit, so an
/// arbitrarily long run of digits fails instead of wrapping.
/// Returns `None` if empty, contains non-digit characters, or is out of range.
pub fn parse_port(digits: &[u8]) -> Option<u16> {
    if digits.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(b - b'0');
        if value > u32::from(u16::MAX) {
            return None;
        }
    }

    u16::try_from(value).ok()
}
