use super::AddressFamily;
use std::net::Ipv4Addr;

/// One decoded address record, in answer-section order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressNode {
    pub family: AddressFamily,

    pub address: [u8; 4],

    pub ttl: i32,
}

impl AddressNode {
    pub fn new(address: [u8; 4], ttl: i32) -> Self {
        Self {
            family: AddressFamily::Inet,
            address,
            ttl,
        }
    }

    pub fn inet(ip: Ipv4Addr, ttl: i32) -> Self {
        Self::new(ip.octets(), ttl)
    }

    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address)
    }
}
