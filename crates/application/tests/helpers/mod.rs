#![allow(dead_code)]

pub mod builders;
pub mod mock_decoder;

pub use alloc::FailNthAlloc;
pub use builders::{cname_chain, DecodedAnswerBuilder};
pub use mock_decoder::MockMessageDecoder;
