use crate::error::{Error, Result};
use crate::types::Scheme;
use crate::url_parts::UrlParts;

/// Outcome of writing one component
///
/// `'u` is the lifetime of the URL passed to [`crack`](crate::crack);
/// borrowed views never point into a decoded or escaped working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Written<'u> {
    /// The caller opted out of this component (or it was not reached)
    #[default]
    Skipped,
    /// Probe mode: a view into the cracked URL
    Borrowed(&'u [u8]),
    /// Copied into the caller buffer, followed by a NUL; holds the copied length
    Copied(usize),
    /// The caller buffer is too small; `required` includes the NUL terminator
    Overflow { required: usize },
}

/// What the caller asked for
#[derive(Debug)]
enum Slot<'b> {
    Skip,
    Probe,
    Buffer(&'b mut [u8]),
}

/// Value handed to [`Field::set`]
#[derive(Debug, Clone, Copy)]
pub(crate) enum Source<'w, 'u> {
    /// Untransformed text borrowed from the caller's URL
    Input(&'u [u8]),
    /// Text from a decode/escape working copy that dies with the call
    Working(&'w [u8]),
}

impl Source<'_, '_> {
    fn bytes(&self) -> &[u8] {
        match *self {
            Self::Input(bytes) => bytes,
            Self::Working(bytes) => bytes,
        }
    }
}

/// One output slot of [`UrlComponents`]
///
/// - [`Field::skip`]: not wanted
/// - [`Field::probe`]: borrow a view of the component from the input URL
/// - [`Field::buffer`]: copy the component into caller storage
#[derive(Debug)]
pub struct Field<'b, 'u> {
    slot: Slot<'b>,
    written: Written<'u>,
}

impl<'b, 'u> Field<'b, 'u> {
    pub fn skip() -> Self {
        Self {
            slot: Slot::Skip,
            written: Written::Skipped,
        }
    }

    pub fn probe() -> Self {
        Self {
            slot: Slot::Probe,
            written: Written::Skipped,
        }
    }

    /// Copy the component into `buf`; its length is the declared capacity.
    /// An empty buffer is rejected by the writer as an invalid parameter.
    pub fn buffer(buf: &'b mut [u8]) -> Self {
        Self {
            slot: Slot::Buffer(buf),
            written: Written::Skipped,
        }
    }

    /// Outcome of the last write
    pub fn written(&self) -> Written<'u> {
        self.written
    }

    /// The component bytes, if they were borrowed or copied
    pub fn value(&self) -> Option<&[u8]> {
        match (self.written, &self.slot) {
            (Written::Borrowed(bytes), _) => Some(bytes),
            (Written::Copied(len), Slot::Buffer(buf)) => buf.get(..len),
            _ => None,
        }
    }

    /// The component as UTF-8 text, if available and valid
    pub fn as_str(&self) -> Option<&str> {
        self.value().and_then(|bytes| core::str::from_utf8(bytes).ok())
    }

    fn non_empty(&self) -> Option<&[u8]> {
        self.value().filter(|bytes| !bytes.is_empty())
    }

    /// Capacity needed after an overflow, terminator included
    pub fn required(&self) -> Option<usize> {
        match self.written {
            Written::Overflow { required } => Some(required),
            _ => None,
        }
    }

    /// Write `source` according to the slot.
    ///
    /// The outcome depends only on the slot and the value, so setting the
    /// same field twice gives the same result. An overflowing value is not
    /// written at all.
    pub(crate) fn set(&mut self, source: Source<'_, 'u>) -> Result<()> {
        let value = source.bytes();
        self.written = match &mut self.slot {
            Slot::Buffer(buf) if buf.is_empty() => return Err(Error::InvalidParameter),
            Slot::Skip => Written::Skipped,
            Slot::Probe => match source {
                Source::Input(bytes) => Written::Borrowed(bytes),
                Source::Working([]) => Written::Borrowed(&[]),
                Source::Working(_) => return Err(Error::InvalidParameter),
            },
            Slot::Buffer(buf) => {
                if value.len() >= buf.len() {
                    Written::Overflow {
                        required: value.len() + 1,
                    }
                } else {
                    buf[..value.len()].copy_from_slice(value);
                    buf[value.len()] = 0;
                    Written::Copied(value.len())
                }
            }
        };
        Ok(())
    }
}

impl Default for Field<'_, '_> {
    fn default() -> Self {
        Self::skip()
    }
}

/// In/out record for [`crack`](crate::crack)
///
/// Set each text field to skip, probe or buffer before cracking; afterwards
/// each reports its [`Written`] outcome. `scheme_kind` and `port` are outputs.
#[derive(Debug)]
pub struct UrlComponents<'b, 'u> {
    /// Version tag; must equal [`UrlComponents::SIZE`]
    pub struct_size: usize,
    pub scheme: Field<'b, 'u>,
    pub scheme_kind: Scheme,
    pub user_name: Field<'b, 'u>,
    pub password: Field<'b, 'u>,
    pub host_name: Field<'b, 'u>,
    /// Explicit port, or the scheme default when none was given
    pub port: u16,
    pub url_path: Field<'b, 'u>,
    /// Query including its leading `?`
    pub extra_info: Field<'b, 'u>,
}

impl<'b, 'u> UrlComponents<'b, 'u> {
    /// Expected value of `struct_size`
    pub const SIZE: usize = core::mem::size_of::<UrlComponents<'static, 'static>>();

    /// A valid record with every field skipped
    pub fn new() -> Self {
        Self {
            struct_size: Self::SIZE,
            scheme: Field::skip(),
            scheme_kind: Scheme::Unknown,
            user_name: Field::skip(),
            password: Field::skip(),
            host_name: Field::skip(),
            port: 0,
            url_path: Field::skip(),
            extra_info: Field::skip(),
        }
    }

    /// A valid record with every field in probe mode
    pub fn probe_all() -> Self {
        Self {
            scheme: Field::probe(),
            user_name: Field::probe(),
            password: Field::probe(),
            host_name: Field::probe(),
            url_path: Field::probe(),
            extra_info: Field::probe(),
            ..Self::new()
        }
    }

    pub(crate) fn fields(&self) -> [&Field<'b, 'u>; 6] {
        [
            &self.scheme,
            &self.user_name,
            &self.password,
            &self.host_name,
            &self.url_path,
            &self.extra_info,
        ]
    }

    /// Largest capacity any overflowing field needs
    pub(crate) fn overflow_required(&self) -> Option<usize> {
        self.fields()
            .into_iter()
            .filter_map(Field::required)
            .max()
    }

    /// Borrow the cracked values as input for [`create`](crate::create).
    /// Empty values count as absent, so a URL without user info or path
    /// does not gain an `@` or a `/`.
    pub fn to_parts(&self) -> UrlParts<'_> {
        UrlParts {
            scheme: self.scheme.non_empty(),
            scheme_kind: self.scheme_kind,
            user_name: self.user_name.non_empty(),
            password: self.password.non_empty(),
            host_name: self.host_name.non_empty(),
            port: Some(self.port),
            url_path: self.url_path.non_empty(),
            extra_info: self.extra_info.non_empty(),
            ..UrlParts::new()
        }
    }
}

impl Default for UrlComponents<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}
