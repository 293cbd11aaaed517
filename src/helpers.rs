/// Cut the input at its first NUL byte, if any.
/// A NUL-terminated buffer (as filled by `create`) yields just the URL text.
pub fn truncate_at_nul(input: &[u8]) -> &[u8] {
    memchr::memchr(0, input).map_or(input, |pos| &input[..pos])
}

/// Find `needle` in `input[start..end]`, returning an absolute position.
pub fn find_between(needle: u8, input: &[u8], start: usize, end: usize) -> Option<usize> {
    memchr::memchr(needle, &input[start..end]).map(|pos| start + pos)
}
