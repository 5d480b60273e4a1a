/// A decoded CNAME record: `alias` is the owner name, `target` the name it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnameLink {
    pub alias: String,

    pub target: String,

    pub ttl: i32,
}

impl CnameLink {
    pub fn new(alias: impl Into<String>, target: impl Into<String>, ttl: i32) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
            ttl,
        }
    }

    pub fn is_self_reference(&self) -> bool {
        self.alias.eq_ignore_ascii_case(&self.target)
    }
}
