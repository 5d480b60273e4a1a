#![allow(dead_code)]

pub mod packet;

pub use alloc::FailNthAlloc;
pub use packet::{PacketBuilder, CLASS_CH, CLASS_IN, TYPE_A, TYPE_AAAA, TYPE_CNAME, TYPE_MX};
