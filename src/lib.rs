//! Single-pass, allocation-free splitting of URLs and CONNECT authorities
//! into field spans.
//!
//! The parser classifies every byte of a request target into schema,
//! userinfo, host, port, path, query or fragment and reports each field as
//! an offset/length pair into the caller's buffer. It performs no
//! percent-decoding or normalization.
//!
//! ```
//! use urlspan::{Field, Target, UrlComponents};
//!
//! let input = b"http://user:pw@[::1]:8080/a/b?q=1#frag";
//! let mut components = UrlComponents::new();
//! urlspan::parse_into(input, Target::Url, &mut components).unwrap();
//!
//! assert_eq!(components.slice(Field::Host, input), Some(&b"::1"[..]));
//! assert_eq!(components.port(), Some(8080));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

mod log;

// Internal modules (not public API)
mod checkers;
mod error;
mod helpers;
mod parser;
mod scheme;
mod types;
mod url_components;
mod url_ref;

pub mod character_sets;

// Public API
pub use error::{ParseError, Result};
pub use parser::{Parser, can_parse, parse, parse_authority, parse_into};
pub use scheme::scheme_type;
pub use types::{Field, FieldSet, FieldSpan, SchemeType, Strictness, Target};
pub use url_components::UrlComponents;
pub use url_ref::UrlRef as Url;
