use crate::compat::Vec;
use crate::error::{Error, Result};
use crate::log::{debug, trace};
use crate::output::{Counter, Output, SliceWriter};
use crate::percent_encode::{PATH_POLICY, escape_into};
use crate::scheme::get_scheme;
use crate::types::{Flags, Scheme};
use crate::url_parts::UrlParts;

/// The port to write after the host, if any.
/// An unset port or the scheme's default port is left out.
fn explicit_port(scheme: Scheme, port: Option<u16>) -> Option<u16> {
    port.filter(|&port| scheme.default_port() != Some(port))
}

/// Serialize `parts` in the fixed order
/// `scheme://[user[:password]@][host[:port]][/]path extra`.
fn serialize<O: Output>(parts: &UrlParts<'_>, flags: Flags, out: &mut O) -> Result<()> {
    if parts.password.is_some() && parts.user_name.is_none() {
        return Err(Error::InvalidParameter);
    }

    let scheme = match parts.scheme {
        Some(text) => {
            out.put(text);
            get_scheme(text).or_http()
        }
        None => {
            let scheme = parts.scheme_kind.or_http();
            out.put(scheme.as_str().as_bytes());
            scheme
        }
    };
    out.put(b"://");

    if let Some(user_name) = parts.user_name {
        out.put(user_name);
        if let Some(password) = parts.password {
            out.put(b":");
            out.put(password);
        }
        out.put(b"@");
    }

    if let Some(host_name) = parts.host_name {
        out.put(host_name);
        if let Some(port) = explicit_port(scheme, parts.port) {
            let mut digits = itoa::Buffer::new();
            out.put(b":");
            out.put(digits.format(port).as_bytes());
        }
        // Slash between host and a relative path
        if parts.url_path.is_some_and(|path| path.first() != Some(&b'/')) {
            out.put(b"/");
        }
    }

    for text in [parts.url_path, parts.extra_info].into_iter().flatten() {
        if flags.contains(Flags::ESCAPE) {
            escape_into(out, text, PATH_POLICY);
        } else {
            out.put(text);
        }
    }
    Ok(())
}

impl UrlParts<'_> {
    /// Length of the URL [`create`] would write, terminator excluded.
    /// With [`Flags::ESCAPE`] the path and extra info count their escaped length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a password without a user name.
    pub fn measure(&self, flags: Flags) -> Result<usize> {
        let mut counter = Counter::default();
        serialize(self, flags, &mut counter)?;
        Ok(counter.total())
    }
}

/// Assemble a URL from `parts` into `url`, followed by a NUL.
///
/// Returns the written length, terminator excluded. Pass `None` to learn the
/// needed capacity from the error.
///
/// # Errors
///
/// - [`Error::InvalidParameter`]: wrong `struct_size`, or a password without a user name
/// - [`Error::InsufficientBuffer`]: `url` is absent or shorter than `required`
///   (the measured length plus the terminator); nothing is written
///
/// # Examples
///
/// ```
/// use urlcrack::{Error, Flags, UrlParts, create};
///
/// let parts = UrlParts::new().with_host_name("example.com").with_url_path("/a b");
///
/// let Err(Error::InsufficientBuffer { required }) = create(&parts, Flags::ESCAPE, None) else {
///     panic!("probe should report the size");
/// };
/// let mut url = vec![0u8; required];
/// let len = create(&parts, Flags::ESCAPE, Some(&mut url)).unwrap();
/// assert_eq!(&url[..len], b"http://example.com/a%20b");
/// ```
pub fn create(parts: &UrlParts<'_>, flags: Flags, url: Option<&mut [u8]>) -> Result<usize> {
    if parts.struct_size != UrlParts::SIZE {
        debug!("create rejected: bad record");
        return Err(Error::InvalidParameter);
    }
    trace!("create {parts:?}, {:#x}", flags.bits());

    let len = parts.measure(flags)?;
    let url = match url {
        Some(buf) if buf.len() > len => buf,
        _ => {
            debug!("create needs {} units", len + 1);
            return Err(Error::InsufficientBuffer { required: len + 1 });
        }
    };

    let mut out = SliceWriter::new(url);
    serialize(parts, flags, &mut out)?;
    Ok(out.terminate())
}

/// Assemble a URL from `parts` into a new exactly-sized buffer (no terminator)
///
/// # Errors
///
/// As [`create`], plus [`Error::OutOfMemory`] if the buffer cannot be allocated.
pub fn create_to_vec(parts: &UrlParts<'_>, flags: Flags) -> Result<Vec<u8>> {
    if parts.struct_size != UrlParts::SIZE {
        return Err(Error::InvalidParameter);
    }
    let mut url = Vec::new();
    url.try_reserve_exact(parts.measure(flags)?)?;
    serialize(parts, flags, &mut url)?;
    Ok(url)
}
