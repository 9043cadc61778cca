use super::HostState;
use crate::character_sets::{is_host_char, is_userinfo_char, unhex};
use crate::error::{ParseError, Result};
use crate::log::debug;
use crate::types::{Field, Strictness};
use crate::url_components::UrlComponents;

/// RFC 6874 zone id bytes: unreserved characters plus `%` for
/// percent-encoded octets.
fn is_zone_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'%' | b'.' | b'-' | b'_' | b'~')
}

/// Advance the authority machine by one byte. `None` is the dead state.
pub fn parse_host_char(state: HostState, b: u8, strictness: Strictness) -> Option<HostState> {
    match state {
        HostState::UserinfoStart | HostState::Userinfo => match b {
            b'@' => Some(HostState::HostStart),
            _ if is_userinfo_char(b) => Some(HostState::Userinfo),
            _ => None,
        },
        HostState::HostStart => match b {
            b'[' => Some(HostState::HostV6Start),
            _ if is_host_char(b, strictness) => Some(HostState::Host),
            _ => None,
        },
        HostState::Host | HostState::HostV6End => match b {
            b':' => Some(HostState::HostPortStart),
            _ if state == HostState::Host && is_host_char(b, strictness) => Some(HostState::Host),
            _ => None,
        },
        HostState::HostV6Start | HostState::HostV6 => match b {
            b']' if state == HostState::HostV6 => Some(HostState::HostV6End),
            b'%' if state == HostState::HostV6 => Some(HostState::HostV6ZoneStart),
            b':' | b'.' => Some(HostState::HostV6),
            _ if unhex(b).is_some() => Some(HostState::HostV6),
            _ => None,
        },
        HostState::HostV6ZoneStart | HostState::HostV6Zone => match b {
            b']' if state == HostState::HostV6Zone => Some(HostState::HostV6End),
            _ if is_zone_char(b) => Some(HostState::HostV6Zone),
            _ => None,
        },
        HostState::HostPortStart | HostState::HostPort => {
            b.is_ascii_digit().then_some(HostState::HostPort)
        }
    }
}

/// Split the authority recorded as the host span into userinfo, host and
/// port, overwriting the host span with the bare host.
///
/// `found_at` selects whether the authority opens with userinfo.
pub fn parse_host(
    input: &[u8],
    out: &mut UrlComponents,
    found_at: bool,
    strictness: Strictness,
) -> Result<()> {
    let authority = out.raw_span(Field::Host);
    let start = authority.offset as usize;
    let bytes = input.get(authority.range()).ok_or(ParseError::new())?;

    out.raw_span_mut(Field::Host).len = 0;

    let mut state = if found_at {
        HostState::UserinfoStart
    } else {
        HostState::HostStart
    };

    for (i, &b) in bytes.iter().enumerate() {
        let Some(next) = parse_host_char(state, b, strictness) else {
            debug!(
                "rejecting authority byte {b:#04x} at offset {} in {state:?}",
                start + i
            );
            return Err(ParseError::new());
        };
        // Bounded by the host span, itself within `u16` range.
        let pos = (start + i) as u16;

        match next {
            HostState::Host | HostState::HostV6 => {
                if state != next {
                    out.raw_span_mut(Field::Host).offset = pos;
                }
                out.extend(Field::Host);
            }
            HostState::HostV6ZoneStart | HostState::HostV6Zone => out.extend(Field::Host),
            HostState::HostPort => {
                if state == HostState::HostPort {
                    out.extend(Field::Port);
                } else {
                    out.open(Field::Port, pos, 1);
                }
            }
            HostState::Userinfo => {
                if state == HostState::Userinfo {
                    out.extend(Field::Userinfo);
                } else {
                    out.open(Field::Userinfo, pos, 1);
                }
            }
            HostState::UserinfoStart
            | HostState::HostStart
            | HostState::HostV6Start
            | HostState::HostV6End
            | HostState::HostPortStart => {}
        }
        state = next;
    }

    if !state.is_terminal() {
        debug!("authority ends in {state:?}");
        return Err(ParseError::new());
    }

    Ok(())
}
