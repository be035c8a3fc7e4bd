use std::collections::HashMap;

use crate::node::{HostId, HostNode};

/// What the converter needs from a host parse tree.
///
/// Implementations absorb front-end version differences: a node kind the
/// adapter cannot type is reported as [`HostNode::Unknown`], and hidden
/// fields that are not always available are exposed as `Option`.
pub trait HostTreeAdapter {
    fn node(&self, id: HostId) -> &HostNode;

    /// Offset of the first character the node covers.
    fn start_pos(&self, id: HostId) -> Option<u32>;

    /// The host's preferred position: the name of a declarator, the `[` of
    /// an array type wrapper, the operator of a binary expression.
    fn preferred_pos(&self, id: HostId) -> Option<u32>;

    /// Offset of the closing brace a block records. Absent when the block
    /// stands for a bare `;` in a type body, or when the front end does not
    /// expose it.
    fn block_end_pos(&self, _id: HostId) -> Option<u32> {
        None
    }

    fn kind_name(&self, id: HostId) -> &str {
        self.node(id).kind_name()
    }
}

/// Authoritative end offsets keyed by host node identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndPosTable {
    ends: HashMap<HostId, u32>,
}

impl EndPosTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: HostId) -> Option<u32> {
        self.ends.get(&id).copied()
    }

    pub fn insert(&mut self, id: HostId, end: u32) -> Option<u32> {
        self.ends.insert(id, end)
    }

    pub fn remove(&mut self, id: HostId) -> Option<u32> {
        self.ends.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }
}

impl FromIterator<(HostId, u32)> for EndPosTable {
    fn from_iter<I: IntoIterator<Item = (HostId, u32)>>(iter: I) -> Self {
        Self {
            ends: iter.into_iter().collect(),
        }
    }
}
