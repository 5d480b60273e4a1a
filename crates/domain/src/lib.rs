//! A-Reply Domain Layer
pub mod config;
pub mod decoded_answer;
pub mod dns_record;
pub mod errors;
pub mod host_entry;
pub mod reply;

pub use config::{Config, ConfigError, DecoderConfig, LoggingConfig};
pub use decoded_answer::DecodedAnswer;
pub use dns_record::{AddressFamily, AddressNode, CnameLink};
pub use errors::{DecodeError, ErrorKind, ReplyError};
pub use host_entry::{release_host_entry, AddrTtl, HostEntry};
pub use reply::{release_reply, Reply, ReplyAddress};
