use crate::types::EscapePolicy;
use percent_encoding::{AsciiSet, CONTROLS};

/// Always escaped unless the policy is space-only:
/// C0 controls and DEL, plus space, ", #, <, >, [, \, ], ^, \`, {, |, }.
/// Bytes above 0x7F are escaped by the encoder itself.
pub const ESCAPE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub const ESCAPE_PERCENT_SET: &AsciiSet = &ESCAPE_SET.add(b'%');

pub const ESCAPE_TILDE_SET: &AsciiSet = &ESCAPE_SET.add(b'~');

pub const ESCAPE_PERCENT_TILDE_SET: &AsciiSet = &ESCAPE_PERCENT_SET.add(b'~');

/// Pick the encode set for a policy (`SPACE_ONLY` is handled by the caller)
pub fn escape_set(policy: EscapePolicy) -> &'static AsciiSet {
    match (
        policy.contains(EscapePolicy::PERCENT),
        policy.contains(EscapePolicy::TILDE),
    ) {
        (false, false) => ESCAPE_SET,
        (true, false) => ESCAPE_PERCENT_SET,
        (false, true) => ESCAPE_TILDE_SET,
        (true, true) => ESCAPE_PERCENT_TILDE_SET,
    }
}

/// Check if a byte is a CR or LF
pub fn is_crlf(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}
