use crate::types::Scheme;

/// Input record for [`create`](crate::create)
///
/// Absent text fields are left out of the URL. `scheme` takes precedence
/// over `scheme_kind`; with neither, the URL is `http`.
///
/// # Examples
///
/// ```
/// use urlcrack::{Flags, Scheme, UrlParts, create_to_vec};
///
/// let parts = UrlParts::new()
///     .with_scheme_kind(Scheme::Https)
///     .with_host_name("example.com")
///     .with_port(8443)
///     .with_url_path("index.html");
/// let url = create_to_vec(&parts, Flags::empty()).unwrap();
/// assert_eq!(url, b"https://example.com:8443/index.html");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Version tag; must equal [`UrlParts::SIZE`]
    pub struct_size: usize,
    pub scheme: Option<&'a [u8]>,
    pub scheme_kind: Scheme,
    pub user_name: Option<&'a [u8]>,
    /// Requires `user_name`
    pub password: Option<&'a [u8]>,
    pub host_name: Option<&'a [u8]>,
    /// `None` or the scheme default leaves the port out
    pub port: Option<u16>,
    pub url_path: Option<&'a [u8]>,
    pub extra_info: Option<&'a [u8]>,
}

impl<'a> UrlParts<'a> {
    /// Expected value of `struct_size`
    pub const SIZE: usize = core::mem::size_of::<UrlParts<'static>>();

    /// A valid record with nothing set
    pub fn new() -> Self {
        Self {
            struct_size: Self::SIZE,
            scheme: None,
            scheme_kind: Scheme::Unknown,
            user_name: None,
            password: None,
            host_name: None,
            port: None,
            url_path: None,
            extra_info: None,
        }
    }

    #[must_use]
    pub fn with_scheme<T: AsRef<[u8]> + ?Sized>(mut self, scheme: &'a T) -> Self {
        self.scheme = Some(scheme.as_ref());
        self
    }

    #[must_use]
    pub fn with_scheme_kind(mut self, scheme_kind: Scheme) -> Self {
        self.scheme_kind = scheme_kind;
        self
    }

    #[must_use]
    pub fn with_user_name<T: AsRef<[u8]> + ?Sized>(mut self, user_name: &'a T) -> Self {
        self.user_name = Some(user_name.as_ref());
        self
    }

    #[must_use]
    pub fn with_password<T: AsRef<[u8]> + ?Sized>(mut self, password: &'a T) -> Self {
        self.password = Some(password.as_ref());
        self
    }

    #[must_use]
    pub fn with_host_name<T: AsRef<[u8]> + ?Sized>(mut self, host_name: &'a T) -> Self {
        self.host_name = Some(host_name.as_ref());
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn with_url_path<T: AsRef<[u8]> + ?Sized>(mut self, url_path: &'a T) -> Self {
        self.url_path = Some(url_path.as_ref());
        self
    }

    /// Query text, normally including its leading `?`
    #[must_use]
    pub fn with_extra_info<T: AsRef<[u8]> + ?Sized>(mut self, extra_info: &'a T) -> Self {
        self.extra_info = Some(extra_info.as_ref());
        self
    }
}

impl Default for UrlParts<'_> {
    fn default() -> Self {
        Self::new()
    }
}
