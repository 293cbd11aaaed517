/// Delimiter scanner states, in the order a URL is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Up to the first `:`
    Scheme,
    /// After `//`; decides whether an `@` starts user info
    Authority,
    /// Between the authority start and `@`
    UserInfo,
    /// Up to the first `/` (or the end)
    HostPort,
    /// From `/` up to the first `?`
    Path,
    /// From `?` to the end
    Query,
}
