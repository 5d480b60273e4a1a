use a_reply_domain::{AddressNode, CnameLink, DecodedAnswer};

pub struct DecodedAnswerBuilder {
    question: String,
    links: Vec<CnameLink>,
    nodes: Vec<AddressNode>,
}

impl DecodedAnswerBuilder {
    pub fn new(question: &str) -> Self {
        Self {
            question: question.to_string(),
            links: vec![],
            nodes: vec![],
        }
    }

    pub fn cname(mut self, alias: &str, target: &str, ttl: i32) -> Self {
        self.links.push(CnameLink::new(alias, target, ttl));
        self
    }

    pub fn address(mut self, octets: [u8; 4], ttl: i32) -> Self {
        self.nodes.push(AddressNode::new(octets, ttl));
        self
    }

    pub fn build(self) -> DecodedAnswer {
        DecodedAnswer {
            question_name: self.question,
            cname_links: self.links,
            address_nodes: self.nodes,
        }
    }
}

/// `names[0] -> names[1] -> ... -> names[n-1]`, every link with the same TTL.
pub fn cname_chain(names: &[&str], ttl: i32) -> DecodedAnswerBuilder {
    let mut builder = DecodedAnswerBuilder::new(names[0]);
    for pair in names.windows(2) {
        builder = builder.cname(pair[0], pair[1], ttl);
    }
    builder
}
