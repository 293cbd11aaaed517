/// Parse a port segment to u16. An empty segment is port 0.
/// Returns None if it contains non-digit characters or is out of range.
pub fn parse_port(port: &[u8]) -> Option<u16> {
    if !port.iter().all(u8::is_ascii_digit) {
        return None;
    }
    port.iter().try_fold(0u16, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(u16::from(digit - b'0'))
    })
}
