use crate::types::Scheme;

/// Get the scheme from its text, ignoring ASCII case.
/// Filters by length and first byte before the full comparison.
pub fn get_scheme(scheme: &[u8]) -> Scheme {
    match (scheme.len(), scheme.first()) {
        (4, Some(b'h' | b'H')) if scheme.eq_ignore_ascii_case(b"http") => Scheme::Http,
        (5, Some(b'h' | b'H')) if scheme.eq_ignore_ascii_case(b"https") => Scheme::Https,
        _ => Scheme::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_scheme() {
        assert_eq!(get_scheme(b"http"), Scheme::Http);
        assert_eq!(get_scheme(b"HTTP"), Scheme::Http);
        assert_eq!(get_scheme(b"https"), Scheme::Https);
        assert_eq!(get_scheme(b"hTTpS"), Scheme::Https);
        assert_eq!(get_scheme(b"htt"), Scheme::Unknown);
        assert_eq!(get_scheme(b"ftp"), Scheme::Unknown);
        assert_eq!(get_scheme(b"httpss"), Scheme::Unknown);
        assert_eq!(get_scheme(b""), Scheme::Unknown);
    }
}
