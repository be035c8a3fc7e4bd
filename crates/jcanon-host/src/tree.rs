use std::ops::Range;

use smol_str::SmolStr;

use crate::adapter::{EndPosTable, HostTreeAdapter};
use crate::flags::Flags;
use crate::node::{HostId, HostLiteral, HostNode, PrimitiveTag};

#[derive(Debug, Clone)]
struct HostEntry {
    node: HostNode,
    start: Option<u32>,
    preferred: Option<u32>,
    block_end: Option<u32>,
}

/// In-memory host parse tree, as handed over by a front end.
#[derive(Debug, Clone, Default)]
pub struct HostTree {
    entries: Vec<HostEntry>,
}

impl HostTree {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = HostId> {
        (0..self.entries.len() as u32).map(HostId::from_raw)
    }
}

impl HostTreeAdapter for HostTree {
    fn node(&self, id: HostId) -> &HostNode {
        &self.entries[id.idx()].node
    }

    fn start_pos(&self, id: HostId) -> Option<u32> {
        self.entries[id.idx()].start
    }

    fn preferred_pos(&self, id: HostId) -> Option<u32> {
        self.entries[id.idx()].preferred
    }

    fn block_end_pos(&self, id: HostId) -> Option<u32> {
        self.entries[id.idx()].block_end
    }
}

/// Builds a [`HostTree`] together with its side table.
///
/// Nodes must be added children first, since a parent refers to its
/// children by id.
#[derive(Debug, Default)]
pub struct HostTreeBuilder {
    tree: HostTree,
    ends: EndPosTable,
}

impl HostTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node whose start and preferred position coincide, recording
    /// `span.end` in the side table.
    pub fn add(&mut self, node: HostNode, span: Range<u32>) -> HostId {
        self.add_with_pos(node, span.start, span.start, Some(span.end))
    }

    /// Adds a node with no side-table entry; its end is left to the per-kind
    /// fallback.
    pub fn add_at(&mut self, node: HostNode, start: u32) -> HostId {
        self.add_with_pos(node, start, start, None)
    }

    pub fn add_unplaced(&mut self, node: HostNode) -> HostId {
        self.push(HostEntry {
            node,
            start: None,
            preferred: None,
            block_end: None,
        })
    }

    pub fn add_with_pos(
        &mut self,
        node: HostNode,
        start: u32,
        preferred: u32,
        end: Option<u32>,
    ) -> HostId {
        let id = self.push(HostEntry {
            node,
            start: Some(start),
            preferred: Some(preferred),
            block_end: None,
        });
        if let Some(end) = end {
            self.ends.insert(id, end);
        }
        id
    }

    fn push(&mut self, entry: HostEntry) -> HostId {
        let id = HostId::from_raw(self.tree.entries.len() as u32);
        self.tree.entries.push(entry);
        id
    }

    pub fn set_block_end(&mut self, id: HostId, pos: u32) {
        self.tree.entries[id.idx()].block_end = Some(pos);
    }

    pub fn set_end(&mut self, id: HostId, end: u32) {
        self.ends.insert(id, end);
    }

    pub fn ident(&mut self, name: &str, start: u32) -> HostId {
        self.add_at(
            HostNode::Ident {
                name: SmolStr::new(name),
            },
            start,
        )
    }

    pub fn primitive(&mut self, tag: PrimitiveTag, start: u32) -> HostId {
        self.add_at(HostNode::PrimitiveType { tag }, start)
    }

    pub fn literal(&mut self, value: HostLiteral, span: Range<u32>) -> HostId {
        self.add(HostNode::Literal { value }, span)
    }

    pub fn select(&mut self, selected: HostId, name: &str, start: u32) -> HostId {
        self.add_at(
            HostNode::Select {
                selected,
                name: SmolStr::new(name),
            },
            start,
        )
    }

    /// A modifiers node; `span` is `None` for an empty modifier list, which
    /// the host leaves without a position.
    pub fn modifiers(
        &mut self,
        flags: Flags,
        annotations: Vec<HostId>,
        span: Option<Range<u32>>,
    ) -> HostId {
        let node = HostNode::Modifiers { flags, annotations };
        match span {
            Some(span) => self.add(node, span),
            None => self.add_unplaced(node),
        }
    }

    pub fn finish(self) -> (HostTree, EndPosTable) {
        (self.tree, self.ends)
    }
}
