mod authority;
mod state;
mod structure;

pub use state::{HostState, State};

use crate::checkers::parse_port;
use crate::error::{ParseError, Result};
use crate::helpers::has_space_or_newline;
use crate::log::{debug, trace};
use crate::types::{Field, Strictness, Target};
use crate::url_components::UrlComponents;
use crate::url_ref::UrlRef;

/// Parser configuration.
///
/// A `Parser` holds no state between calls; one value can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parser {
    strictness: Strictness,
}

impl Parser {
    /// Parser using the default [`Strictness`].
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_strictness(strictness: Strictness) -> Self {
        Self { strictness }
    }

    pub const fn strict() -> Self {
        Self::with_strictness(Strictness::Strict)
    }

    pub const fn lenient() -> Self {
        Self::with_strictness(Strictness::Lenient)
    }

    pub const fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Split `input` into fields, writing their spans into `out`.
    ///
    /// `out` is cleared first. On error its contents are meaningless.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is empty, longer than `u16::MAX` bytes,
    /// or not a well-formed URL (or `host:port` for [`Target::Authority`]).
    pub fn parse_into(&self, input: &[u8], target: Target, out: &mut UrlComponents) -> Result<()> {
        out.clear();

        if input.is_empty() || input.len() > usize::from(u16::MAX) {
            debug!("rejecting input of {} bytes", input.len());
            return Err(ParseError::new());
        }
        if let Some(pos) = has_space_or_newline(input) {
            debug!("rejecting whitespace at offset {pos}");
            return Err(ParseError::new());
        }

        let found_at = structure::scan(input, target, self.strictness, out)?;

        // `http:///x` has a schema but no authority
        if out.has(Field::Schema) && !out.has(Field::Host) {
            debug!("rejecting schema without host");
            return Err(ParseError::new());
        }

        if out.has(Field::Host) {
            authority::parse_host(input, out, found_at, self.strictness)?;
        }

        if target == Target::Authority && out.field_set() != Field::Host | Field::Port {
            debug!("rejecting CONNECT target with fields {:?}", out.field_set());
            return Err(ParseError::new());
        }

        if let Some(digits) = out.slice(Field::Port, input) {
            let Some(port) = parse_port(digits) else {
                debug!("rejecting out of range port");
                return Err(ParseError::new());
            };
            out.port = port;
        }

        trace!("parsed {} byte target into {:?}", input.len(), out.field_set());
        Ok(())
    }

    /// Parse a full URL into a borrowed view.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse_into`].
    pub fn parse<'a>(&self, input: &'a str, target: Target) -> Result<UrlRef<'a>> {
        let mut components = UrlComponents::new();
        self.parse_into(input.as_bytes(), target, &mut components)?;
        Ok(UrlRef::from_parts(input, components))
    }

    /// Check whether `input` would parse, without keeping the spans.
    pub fn can_parse(&self, input: &[u8], target: Target) -> bool {
        self.parse_into(input, target, &mut UrlComponents::new()).is_ok()
    }
}

/// Split `input` with the default [`Parser`].
///
/// # Errors
///
/// See [`Parser::parse_into`].
pub fn parse_into(input: &[u8], target: Target, out: &mut UrlComponents) -> Result<()> {
    Parser::new().parse_into(input, target, out)
}

/// Parse a request target or absolute URL with the default [`Parser`].
///
/// # Errors
///
/// See [`Parser::parse_into`].
pub fn parse(input: &str) -> Result<UrlRef<'_>> {
    Parser::new().parse(input, Target::Url)
}

/// Parse a CONNECT `host:port` authority with the default [`Parser`].
///
/// # Errors
///
/// See [`Parser::parse_into`].
pub fn parse_authority(input: &str) -> Result<UrlRef<'_>> {
    Parser::new().parse(input, Target::Authority)
}

/// Check a URL with the default [`Parser`].
pub fn can_parse(input: &str) -> bool {
    Parser::new().can_parse(input.as_bytes(), Target::Url)
}
