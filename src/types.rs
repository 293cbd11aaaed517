use crate::scheme::get_scheme;

/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Scheme {
    /// Not set, or not `http`/`https`
    #[default]
    Unknown,
    Http,
    Https,
}

impl Scheme {
    /// Canonical lowercase text (empty for `Unknown`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Recognize `http`/`https`, ignoring ASCII case; anything else is `Unknown`
    pub fn from_bytes(scheme: &[u8]) -> Self {
        get_scheme(scheme)
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http => Some(80),
            Self::Https => Some(443),
            Self::Unknown => None,
        }
    }

    /// Unknown schemes fall back to `Http` when a concrete scheme is needed.
    pub(crate) fn or_http(self) -> Self {
        match self {
            Self::Unknown => Self::Http,
            known => known,
        }
    }
}

macro_rules! bit_set {
    ($(#[$meta:meta])* $name:ident { $($(#[$flag_meta:meta])* $flag:ident = $bits:expr;)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
        pub struct $name(u32);

        impl $name {
            $($(#[$flag_meta])* pub const $flag: Self = Self($bits);)*

            /// The empty set
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Wrap raw bits; unknown bits are kept but never consulted
            pub const fn from_bits(bits: u32) -> Self {
                Self(bits)
            }

            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Check if every bit of `other` is set
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                self.union(rhs)
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                *self = self.union(rhs);
            }
        }
    };
}

bit_set! {
    /// Call flags shared by [`crack`](crate::crack) and [`create`](crate::create)
    Flags {
        /// Decode percent-escapes across the whole URL before cracking
        DECODE = 0x1000_0000;
        /// Escape the path tail before cracking, or path and extra info when creating
        ESCAPE = 0x8000_0000;
    }
}

bit_set! {
    /// Escaping options on top of the base class
    /// (controls, bytes >= 0x7F and the reserved set)
    EscapePolicy {
        /// Also escape `%`
        PERCENT = 0x01;
        /// Also escape `~`
        TILDE = 0x02;
        /// Escape nothing but space
        SPACE_ONLY = 0x04;
        /// Drop `\r` and `\n` instead of escaping them
        REMOVE_CRLF = 0x08;
    }
}
