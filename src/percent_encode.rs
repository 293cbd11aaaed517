use crate::character_sets::{escape_set, is_crlf};
use crate::compat::Vec;
use crate::error::{Error, Result};
use crate::output::{Counter, Output, SliceWriter};
use crate::types::EscapePolicy;
use percent_encoding::{percent_decode, percent_encode};

/// Policy applied to URL path tails and to path/extra info when creating
pub const PATH_POLICY: EscapePolicy = EscapePolicy::PERCENT.union(EscapePolicy::TILDE);

/// Decode `%XX` sequences; anything else (including a malformed `%`) is copied.
///
/// The output is never longer than the input.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the working buffer cannot be allocated.
///
/// # Examples
///
/// ```
/// assert_eq!(urlcrack::decode(b"/a%2Fb%zz").unwrap(), b"/a/b%zz");
/// ```
pub fn decode(text: &[u8]) -> Result<Vec<u8>> {
    let mut decoded = Vec::new();
    decoded.try_reserve_exact(text.len())?;
    decoded.extend(percent_decode(text));
    Ok(decoded)
}

/// Escape `src` into `out` according to `policy`.
pub(crate) fn escape_into<O: Output>(out: &mut O, src: &[u8], policy: EscapePolicy) {
    let strip_crlf = policy.contains(EscapePolicy::REMOVE_CRLF);
    for segment in src.split(|&b| strip_crlf && is_crlf(b)) {
        if policy.contains(EscapePolicy::SPACE_ONLY) {
            let mut runs = segment.split(|&b| b == b' ');
            if let Some(first) = runs.next() {
                out.put(first);
            }
            for run in runs {
                out.put(b"%20");
                out.put(run);
            }
        } else {
            for chunk in percent_encode(segment, escape_set(policy)) {
                out.put(chunk.as_bytes());
            }
        }
    }
}

/// Length of `src` once escaped, terminator excluded
pub fn escaped_len(src: &[u8], policy: EscapePolicy) -> usize {
    let mut counter = Counter::default();
    escape_into(&mut counter, src, policy);
    counter.total()
}

/// Escape `src` into `dst` and NUL-terminate it, or only measure when `dst` is `None`.
///
/// Returns the escaped length, terminator excluded.
///
/// # Errors
///
/// Returns [`Error::InsufficientBuffer`] without writing if `dst` cannot hold
/// the escaped text plus its terminator.
///
/// # Examples
///
/// ```
/// use urlcrack::{EscapePolicy, escape};
///
/// let len = escape(None, b"a b~", EscapePolicy::TILDE).unwrap();
/// assert_eq!(len, 8);
///
/// let mut buf = [0u8; 9];
/// escape(Some(&mut buf), b"a b~", EscapePolicy::TILDE).unwrap();
/// assert_eq!(&buf, b"a%20b%7E\0");
/// ```
pub fn escape(dst: Option<&mut [u8]>, src: &[u8], policy: EscapePolicy) -> Result<usize> {
    let len = escaped_len(src, policy);
    let Some(dst) = dst else {
        return Ok(len);
    };
    if dst.len() <= len {
        return Err(Error::InsufficientBuffer { required: len + 1 });
    }
    let mut out = SliceWriter::new(dst);
    escape_into(&mut out, src, policy);
    Ok(out.terminate())
}

/// Escape `src` into a new exactly-sized buffer (no terminator)
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the buffer cannot be allocated.
pub fn escape_to_vec(src: &[u8], policy: EscapePolicy) -> Result<Vec<u8>> {
    let mut escaped = Vec::new();
    escaped.try_reserve_exact(escaped_len(src, policy))?;
    escape_into(&mut escaped, src, policy);
    Ok(escaped)
}

/// Escape only the part of `url` from its last `/` on, with `%` and `~` escaped.
/// Everything before that slash (scheme, authority, leading path) is copied verbatim,
/// so existing escapes there are left alone. Without a slash the copy is verbatim.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the working copy cannot be allocated.
pub fn escape_url_preserving_base(url: &[u8]) -> Result<Vec<u8>> {
    let (base, tail) = memchr::memrchr(b'/', url).map_or((url, &[][..]), |pos| url.split_at(pos));

    let mut escaped = Vec::new();
    escaped.try_reserve_exact(base.len() + escaped_len(tail, PATH_POLICY))?;
    escaped.extend_from_slice(base);
    escape_into(&mut escaped, tail, PATH_POLICY);
    Ok(escaped)
}
