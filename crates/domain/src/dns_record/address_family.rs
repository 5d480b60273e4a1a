use std::fmt;

/// Size in bytes of an IPv4 address as carried in A record data.
pub const INET_ADDRESS_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressFamily {
    #[default]
    Inet,
}

impl AddressFamily {
    /// Numeric family as used by `struct hostent::h_addrtype`.
    pub fn as_raw(&self) -> i32 {
        match self {
            AddressFamily::Inet => libc::AF_INET,
        }
    }

    pub fn address_length(&self) -> usize {
        match self {
            AddressFamily::Inet => INET_ADDRESS_LENGTH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Inet => "AF_INET",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
