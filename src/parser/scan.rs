use super::State;
use crate::checkers::parse_port;
use crate::error::{Error, Result};
use crate::helpers::find_between;
use crate::scheme::get_scheme;
use crate::types::Scheme;
use core::ops::Range;

/// Component positions found by [`scan`], as byte ranges into the scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spans {
    pub scheme: Range<usize>,
    pub scheme_kind: Scheme,
    pub user_name: Range<usize>,
    pub password: Range<usize>,
    pub host_name: Range<usize>,
    pub port: u16,
    pub url_path: Range<usize>,
    pub extra_info: Range<usize>,
}

impl Spans {
    /// Every component empty at `end`
    fn empty(end: usize) -> Self {
        Self {
            scheme: end..end,
            scheme_kind: Scheme::Unknown,
            user_name: end..end,
            password: end..end,
            host_name: end..end,
            port: 0,
            url_path: end..end,
            extra_info: end..end,
        }
    }
}

/// Delimit the components of an absolute `http`/`https` URL.
///
/// Delimiter precedence:
/// - the scheme ends at the first `:` and must be followed by `//` plus at least one byte
/// - an `@` starts user info only if no `/` comes before it; the first `:` in the
///   user info splits user name from password
/// - the authority ends at the first `/`, and the first `:` in it splits host from port
/// - the path ends at the first `?`, and the extra info (with its `?`) runs to the end
///
/// # Errors
///
/// Returns [`Error::UnrecognizedScheme`] for a missing `:` or a scheme other than
/// `http`/`https`, and [`Error::MalformedUrl`] for a missing `//`, an empty
/// authority, or a port that is non-numeric or above 65535. An empty port
/// segment is port 0.
pub fn scan(url: &[u8]) -> Result<Spans> {
    let len = url.len();
    let mut spans = Spans::empty(len);
    let mut state = State::Scheme;
    let mut pos = 0;
    let mut user_info_end = 0;

    loop {
        state = match state {
            State::Scheme => {
                let colon = find_between(b':', url, 0, len).ok_or(Error::UnrecognizedScheme)?;
                spans.scheme_kind = get_scheme(&url[..colon]);
                if spans.scheme_kind == Scheme::Unknown {
                    return Err(Error::UnrecognizedScheme);
                }
                spans.scheme = 0..colon;

                let rest = &url[colon + 1..];
                if !rest.starts_with(b"//") || rest.len() == 2 {
                    return Err(Error::MalformedUrl);
                }
                pos = colon + 3;
                State::Authority
            }
            State::Authority => {
                spans.user_name = pos..pos;
                spans.password = pos..pos;
                match find_between(b'@', url, pos, len) {
                    Some(at) if find_between(b'/', url, pos, at).is_none() => {
                        user_info_end = at;
                        State::UserInfo
                    }
                    _ => State::HostPort,
                }
            }
            State::UserInfo => {
                match find_between(b':', url, pos, user_info_end) {
                    Some(colon) => {
                        spans.user_name = pos..colon;
                        spans.password = colon + 1..user_info_end;
                    }
                    None => {
                        spans.user_name = pos..user_info_end;
                        spans.password = user_info_end..user_info_end;
                    }
                }
                pos = user_info_end + 1;
                State::HostPort
            }
            State::HostPort => {
                let end = find_between(b'/', url, pos, len).unwrap_or(len);
                match find_between(b':', url, pos, end) {
                    Some(colon) => {
                        spans.host_name = pos..colon;
                        spans.port = parse_port(&url[colon + 1..end]).ok_or(Error::MalformedUrl)?;
                    }
                    None => {
                        spans.host_name = pos..end;
                        spans.port = spans.scheme_kind.default_port().unwrap_or_default();
                    }
                }
                pos = end;
                if pos == len {
                    return Ok(spans);
                }
                State::Path
            }
            State::Path => {
                let end = find_between(b'?', url, pos, len).unwrap_or(len);
                spans.url_path = pos..end;
                pos = end;
                if pos == len {
                    return Ok(spans);
                }
                State::Query
            }
            State::Query => {
                spans.extra_info = pos..len;
                return Ok(spans);
            }
        };
    }
}
