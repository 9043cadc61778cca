use super::State;
use crate::character_sets::{is_forbidden, is_url_char, is_userinfo_char};
use crate::error::{ParseError, Result};
use crate::log::debug;
use crate::types::{Field, Strictness, Target};
use crate::url_components::UrlComponents;

/// Advance the URL structure machine by one byte. `None` is the dead state.
pub fn parse_url_char(state: State, b: u8, strictness: Strictness) -> Option<State> {
    if is_forbidden(b, strictness) {
        return None;
    }

    match state {
        // Origin-form targets start with `/` or `*`, absolute-form with a
        // scheme letter.
        State::SpacesBeforeUrl => match b {
            b'/' | b'*' => Some(State::Path),
            _ if b.is_ascii_alphabetic() => Some(State::Schema),
            _ => None,
        },
        State::Schema => match b {
            b':' => Some(State::SchemaSlash),
            _ if b.is_ascii_alphabetic() => Some(State::Schema),
            _ => None,
        },
        State::SchemaSlash => (b == b'/').then_some(State::SchemaSlashSlash),
        State::SchemaSlashSlash => (b == b'/').then_some(State::ServerStart),
        State::ServerStart | State::Server | State::ServerWithAt => match b {
            b'/' => Some(State::Path),
            b'?' => Some(State::QueryStringStart),
            b'@' if state == State::ServerWithAt => None,
            b'@' => Some(State::ServerWithAt),
            _ if is_userinfo_char(b) || b == b'[' || b == b']' => {
                // Once `@` is seen the rest of the authority is host and port.
                if state == State::ServerWithAt {
                    Some(State::ServerWithAt)
                } else {
                    Some(State::Server)
                }
            }
            _ => None,
        },
        State::Path => match b {
            b'?' => Some(State::QueryStringStart),
            b'#' => Some(State::FragmentStart),
            _ if is_url_char(b, strictness) => Some(State::Path),
            _ => None,
        },
        State::QueryStringStart | State::QueryString => match b {
            b'#' => Some(State::FragmentStart),
            b'?' => Some(State::QueryString),
            _ if is_url_char(b, strictness) => Some(State::QueryString),
            _ => None,
        },
        State::FragmentStart => match b {
            b'#' => Some(State::FragmentStart),
            b'?' => Some(State::Fragment),
            _ if is_url_char(b, strictness) => Some(State::Fragment),
            _ => None,
        },
        State::Fragment => match b {
            b'?' | b'#' => Some(State::Fragment),
            _ if is_url_char(b, strictness) => Some(State::Fragment),
            _ => None,
        },
    }
}

/// Run the structure machine over the whole input, recording schema, host,
/// path, query and fragment spans into `out`.
///
/// Returns whether the authority contained a userinfo `@`.
pub fn scan(
    input: &[u8],
    target: Target,
    strictness: Strictness,
    out: &mut UrlComponents,
) -> Result<bool> {
    let mut state = match target {
        Target::Url => State::SpacesBeforeUrl,
        Target::Authority => State::ServerStart,
    };
    let mut current: Option<Field> = None;
    let mut found_at = false;

    for (pos, &b) in input.iter().enumerate() {
        let Some(next) = parse_url_char(state, b, strictness) else {
            debug!("rejecting byte {b:#04x} at offset {pos} in {state:?}");
            return Err(ParseError::new());
        };
        state = next;

        let Some(field) = state.field() else {
            continue;
        };
        if state == State::ServerWithAt {
            found_at = true;
        }

        if current == Some(field) {
            out.extend(field);
        } else {
            // Callers bound the input to `u16::MAX` bytes.
            out.open(field, pos as u16, 1);
            current = Some(field);
        }
    }

    Ok(found_at)
}
