use std::fmt;

/// Address of one node on the server, in the (namespace index, string
/// identifier) form.
///
/// Node ids are built fresh for every call; nothing caches or interns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub ns: u16,
    pub identifier: String,
}

impl NodeId {
    pub fn new<S: Into<String>>(ns: u16, identifier: S) -> Self {
        Self {
            ns,
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ns={};s={}", self.ns, self.identifier)
    }
}
