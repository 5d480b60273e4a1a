use crate::dns_record::{AddressNode, CnameLink};

/// Decoder output for a single query: the question name plus the CNAME links and
/// address nodes found along its answer chain, both in answer-section order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedAnswer {
    pub question_name: String,

    pub cname_links: Vec<CnameLink>,

    pub address_nodes: Vec<AddressNode>,
}

impl DecodedAnswer {
    pub fn new(question_name: impl Into<String>) -> Self {
        Self {
            question_name: question_name.into(),
            cname_links: Vec::new(),
            address_nodes: Vec::new(),
        }
    }

    pub fn with_cname(mut self, link: CnameLink) -> Self {
        self.cname_links.push(link);
        self
    }

    pub fn with_address(mut self, node: AddressNode) -> Self {
        self.address_nodes.push(node);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cname_links.is_empty() && self.address_nodes.is_empty()
    }
}
