use crate::dns_record::AddressFamily;
use std::net::Ipv4Addr;

/// Legacy `struct hostent` shaped result.
///
/// All addresses live in one contiguous block of `address_count * address_length`
/// bytes; the address list is an index-based view over that block, so dropping the
/// entry releases the block once regardless of how many addresses it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    name: String,
    aliases: Vec<String>,
    address_family: AddressFamily,
    address_block: Vec<u8>,
}

impl HostEntry {
    pub fn new(
        name: String,
        aliases: Vec<String>,
        address_family: AddressFamily,
        address_block: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(address_block.len() % address_family.address_length(), 0);
        Self {
            name,
            aliases,
            address_family,
            address_block,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Alias at `index`; `None` at and past the terminator slot (`index == alias_count()`).
    pub fn alias(&self, index: usize) -> Option<&str> {
        self.aliases.get(index).map(String::as_str)
    }

    pub fn address_family(&self) -> AddressFamily {
        self.address_family
    }

    /// The family as the numeric `h_addrtype` value (`AF_INET`).
    pub fn raw_address_family(&self) -> i32 {
        self.address_family.as_raw()
    }

    pub fn address_length(&self) -> usize {
        self.address_family.address_length()
    }

    pub fn address_count(&self) -> usize {
        self.address_block.len() / self.address_length()
    }

    /// Address at `index`; `None` at and past the terminator slot.
    pub fn address(&self, index: usize) -> Option<&[u8]> {
        let len = self.address_length();
        let start = index.checked_mul(len)?;
        self.address_block.get(start..start.checked_add(len)?)
    }

    pub fn addresses(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.address_block.chunks_exact(self.address_length())
    }

    pub fn ip(&self, index: usize) -> Option<Ipv4Addr> {
        let bytes: [u8; 4] = self.address(index)?.try_into().ok()?;
        Some(Ipv4Addr::from(bytes))
    }

    /// The shared backing block for every address in the entry.
    pub fn address_block(&self) -> &[u8] {
        &self.address_block
    }
}

/// Releases a host entry. Passing `None` is allowed and does nothing.
pub fn release_host_entry(entry: Option<HostEntry>) {
    drop(entry);
}

/// One slot of the caller-supplied `(address, ttl)` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddrTtl {
    pub ipaddr: Ipv4Addr,

    pub ttl: i32,
}

impl AddrTtl {
    pub fn new(ipaddr: Ipv4Addr, ttl: i32) -> Self {
        Self { ipaddr, ttl }
    }
}

impl Default for AddrTtl {
    fn default() -> Self {
        Self {
            ipaddr: Ipv4Addr::UNSPECIFIED,
            ttl: 0,
        }
    }
}
