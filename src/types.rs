use core::ops::{BitOr, BitOrAssign, Range};

/// Structural role of a byte range within a URL.
///
/// The discriminant doubles as the bit position in [`FieldSet`] and the
/// slot index in [`UrlComponents`](crate::UrlComponents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Field {
    Schema = 0,
    Host = 1,
    Port = 2,
    Path = 3,
    Query = 4,
    Fragment = 5,
    Userinfo = 6,
}

impl Field {
    /// Number of distinct roles.
    pub const COUNT: usize = 7;

    /// All roles in slot order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Schema,
        Field::Host,
        Field::Port,
        Field::Path,
        Field::Query,
        Field::Fragment,
        Field::Userinfo,
    ];

    /// Slot index of this role.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
            Self::Userinfo => "userinfo",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Bitmask of the roles recognized by a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldSet(u8);

impl FieldSet {
    pub const EMPTY: FieldSet = FieldSet(0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn insert(&mut self, field: Field) {
        self.0 |= field.bit();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the contained roles in slot order.
    pub fn iter(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |&f| self.contains(f))
    }
}

impl From<Field> for FieldSet {
    fn from(field: Field) -> Self {
        FieldSet(field.bit())
    }
}

impl BitOr for Field {
    type Output = FieldSet;

    fn bitor(self, rhs: Field) -> FieldSet {
        FieldSet(self.bit() | rhs.bit())
    }
}

impl BitOr<Field> for FieldSet {
    type Output = FieldSet;

    fn bitor(self, rhs: Field) -> FieldSet {
        FieldSet(self.0 | rhs.bit())
    }
}

impl BitOr for FieldSet {
    type Output = FieldSet;

    fn bitor(self, rhs: FieldSet) -> FieldSet {
        FieldSet(self.0 | rhs.0)
    }
}

impl BitOrAssign<Field> for FieldSet {
    fn bitor_assign(&mut self, rhs: Field) {
        self.insert(rhs);
    }
}

/// Half-open byte range `offset..offset + len` into the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldSpan {
    pub offset: u16,
    pub len: u16,
}

impl FieldSpan {
    pub const fn new(offset: u16, len: u16) -> Self {
        Self { offset, len }
    }

    /// Exclusive end offset.
    pub const fn end(self) -> usize {
        self.offset as usize + self.len as usize
    }

    pub const fn range(self) -> Range<usize> {
        self.offset as usize..self.end()
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// What shape of input the parser expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// An origin-form, asterisk-form or absolute-form request target.
    #[default]
    Url,
    /// A bare `host:port` as sent with a proxy `CONNECT` request.
    Authority,
}

/// Character classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Accepts tab, form feed and any byte with the high bit set in paths,
    /// queries and fragments, and `_` in host names.
    Lenient,
    /// Printable ASCII only.
    Strict,
}

impl Default for Strictness {
    fn default() -> Self {
        if cfg!(feature = "strict") {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    #[default]
    NotSpecial,
}

impl SchemeType {
    /// Check if this is a special scheme
    pub fn is_special(self) -> bool {
        self != Self::NotSpecial
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::NotSpecial => None,
        }
    }
}
