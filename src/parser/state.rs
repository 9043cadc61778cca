use crate::types::Field;

/// URL structure machine states.
///
/// The dead state is `None` in the transition functions' return type, so
/// a dead machine cannot be stepped again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Before the first byte of a request target
    SpacesBeforeUrl,
    /// Scheme letters
    Schema,
    /// `:` seen after the scheme
    SchemaSlash,
    /// First `/` after the scheme
    SchemaSlashSlash,
    /// Second `/`; the authority starts with the next byte
    ServerStart,
    /// Authority bytes
    Server,
    /// Authority bytes after the userinfo `@`
    ServerWithAt,
    /// Path state
    Path,
    /// `?` seen
    QueryStringStart,
    /// Query state
    QueryString,
    /// `#` seen
    FragmentStart,
    /// Fragment state
    Fragment,
}

impl State {
    /// Role of the byte that moved the machine into this state. Delimiter
    /// states have none.
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Schema => Some(Field::Schema),
            Self::Server | Self::ServerWithAt => Some(Field::Host),
            Self::Path => Some(Field::Path),
            Self::QueryString => Some(Field::Query),
            Self::Fragment => Some(Field::Fragment),
            Self::SpacesBeforeUrl
            | Self::SchemaSlash
            | Self::SchemaSlashSlash
            | Self::ServerStart
            | Self::QueryStringStart
            | Self::FragmentStart => None,
        }
    }
}

/// Authority sub-machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    UserinfoStart,
    Userinfo,
    HostStart,
    HostV6Start,
    Host,
    HostV6,
    HostV6End,
    HostV6ZoneStart,
    HostV6Zone,
    HostPortStart,
    HostPort,
}

impl HostState {
    /// Whether the authority may end in this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Host | Self::HostV6End | Self::HostPort)
    }
}
