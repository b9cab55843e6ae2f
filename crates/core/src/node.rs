//! Canonical node identifiers for resolved nets.

use std::fmt;

/// Identifier of a resolved electrical net.
///
/// Node 0 is always ground. Every other net gets a positive id, dense from 1.
/// Ids are stable within one resolution pass but not across circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The ground node.
    pub const GROUND: NodeId = NodeId(0);

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn is_ground(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
