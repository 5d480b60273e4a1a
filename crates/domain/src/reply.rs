use crate::dns_record::AddressFamily;
use std::net::Ipv4Addr;

/// An address together with its effective TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyAddress {
    pub octets: [u8; 4],

    pub ttl: i32,
}

impl ReplyAddress {
    pub fn new(octets: [u8; 4], ttl: i32) -> Self {
        Self { octets, ttl }
    }

    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }
}

/// Structured result of assembling one A query's answer section.
///
/// Fields are private; every read goes through an accessor, and index-based
/// accessors return a neutral value (`None` or `0`) when the index is out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    name: String,
    aliases: Vec<String>,
    address_family: AddressFamily,
    addresses: Vec<ReplyAddress>,
}

impl Reply {
    pub fn new(
        name: String,
        aliases: Vec<String>,
        address_family: AddressFamily,
        addresses: Vec<ReplyAddress>,
    ) -> Self {
        Self {
            name,
            aliases,
            address_family,
            addresses,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn alias(&self, index: usize) -> Option<&str> {
        self.aliases.get(index).map(String::as_str)
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn address_family(&self) -> AddressFamily {
        self.address_family
    }

    pub fn address_length(&self) -> usize {
        self.address_family.address_length()
    }

    pub fn address_count(&self) -> usize {
        self.addresses.len()
    }

    pub fn address(&self, index: usize) -> Option<&[u8]> {
        self.addresses.get(index).map(|a| a.octets.as_slice())
    }

    pub fn ip(&self, index: usize) -> Option<Ipv4Addr> {
        self.addresses.get(index).map(ReplyAddress::ip)
    }

    pub fn ttl(&self, index: usize) -> i32 {
        self.addresses.get(index).map_or(0, |a| a.ttl)
    }

    pub fn addresses(&self) -> &[ReplyAddress] {
        &self.addresses
    }
}

/// Releases a reply. Passing `None` is allowed and does nothing.
pub fn release_reply(reply: Option<Reply>) {
    drop(reply);
}
