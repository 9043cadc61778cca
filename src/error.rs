/// Error returned when input is not a well-formed URL or authority.
///
/// Every syntax violation collapses into this one value: a stray space or
/// line break, a byte outside the active character class, a schema with no
/// host, a second `@` in the authority, an unterminated IPv6 literal, a port
/// above 65535, or the wrong field set for a CONNECT authority. Enable the
/// `log` feature to see which rule rejected an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError {
    _priv: (),
}

impl ParseError {
    pub(crate) const fn new() -> Self {
        Self { _priv: () }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("invalid URL")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
