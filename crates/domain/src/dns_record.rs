pub mod address_family;
pub mod address_node;
pub mod cname_link;

pub use address_family::AddressFamily;
pub use address_node::AddressNode;
pub use cname_link::CnameLink;
