#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;
mod log;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod output;
mod parser;
mod percent_encode;
mod scheme;
mod types;
mod url_builder;
mod url_components;
mod url_parts;

// Public API
pub use error::{Error, Result};
pub use parser::crack;
pub use percent_encode::{decode, escape, escape_to_vec, escape_url_preserving_base, escaped_len};
pub use types::{EscapePolicy, Flags, Scheme};
pub use url_builder::{create, create_to_vec};
pub use url_components::{Field, UrlComponents, Written};
pub use url_parts::UrlParts;
