//! Start/end offsets of host nodes.
//!
//! The start comes from the adapter. The end comes from the side table when
//! it has an entry, otherwise from a per-kind walk to the rightmost token the
//! node covers. The walk keeps its own stack, since host trees can nest
//! deeper than the conversion is allowed to, and remembers every end it
//! resolves.

use std::cell::RefCell;
use std::collections::HashMap;

use jcanon_ast::Position;
use jcanon_host::{EndPosTable, HostId, HostNode, HostTreeAdapter};

pub struct Reconciler<'h, H: HostTreeAdapter + ?Sized> {
    host: &'h H,
    ends: &'h EndPosTable,
    computed: RefCell<HashMap<HostId, Option<u32>>>,
}

impl<'h, H: HostTreeAdapter + ?Sized> Reconciler<'h, H> {
    pub fn new(host: &'h H, ends: &'h EndPosTable) -> Self {
        Self {
            host,
            ends,
            computed: RefCell::new(HashMap::new()),
        }
    }

    pub fn start(&self, id: HostId) -> Option<u32> {
        self.host.start_pos(id)
    }

    pub fn end(&self, id: HostId) -> Option<u32> {
        match self.known_end(id) {
            Some(end) => end,
            None => self.fallback_end(id),
        }
    }

    /// `Some` once the end of `id` is settled, either way.
    fn known_end(&self, id: HostId) -> Option<Option<u32>> {
        if let Some(end) = self.ends.get(id) {
            return Some(Some(end));
        }
        self.computed.borrow().get(&id).copied()
    }

    /// Nodes whose ends the fallback for `id` is computed from.
    fn end_inputs(&self, id: HostId) -> Vec<HostId> {
        match self.host.node(id) {
            HostNode::Ident { .. } | HostNode::PrimitiveType { .. } | HostNode::Skip => Vec::new(),
            HostNode::Select { selected, .. } => vec![*selected],
            HostNode::Block { stats, .. } => match self.host.block_end_pos(id) {
                Some(_) => Vec::new(),
                None => stats.clone(),
            },
            node => node.children(),
        }
    }

    /// The per-kind end of `id`, once every input is settled.
    fn combine(&self, id: HostId) -> Option<u32> {
        let settled = |input: HostId| self.known_end(input).flatten();
        match self.host.node(id) {
            HostNode::Ident { name } => Some(self.start(id)? + len(name)),
            HostNode::PrimitiveType { tag } => Some(self.start(id)? + len(tag.keyword())),
            HostNode::Skip => Some(self.start(id)? + 1),
            HostNode::Select { selected, name } => Some(settled(*selected)? + 1 + len(name)),
            HostNode::Block { .. } => match self.host.block_end_pos(id) {
                Some(close) => Some(close + 1),
                None => self.end_inputs(id).into_iter().filter_map(settled).max(),
            },
            node => node.children().into_iter().filter_map(settled).max(),
        }
    }

    /// Post-order walk from `root` over nodes without a settled end.
    fn fallback_end(&self, root: HostId) -> Option<u32> {
        let mut stack = vec![(root, false)];
        while let Some((id, inputs_pushed)) = stack.pop() {
            if self.known_end(id).is_some() {
                continue;
            }
            if !inputs_pushed {
                let pending: Vec<_> = self
                    .end_inputs(id)
                    .into_iter()
                    .filter(|input| self.known_end(*input).is_none())
                    .collect();
                if !pending.is_empty() {
                    stack.push((id, true));
                    stack.extend(pending.into_iter().map(|input| (input, false)));
                    continue;
                }
            }
            let end = self.combine(id);
            self.computed.borrow_mut().insert(id, end);
        }
        self.known_end(root).flatten()
    }

    pub fn span(&self, id: HostId) -> Position {
        Position::from_offsets(self.start(id), self.end(id))
    }

    /// `[preferred, preferred + len(name))`, the name token of a declarator.
    pub fn name_span(&self, id: HostId, name: &str) -> Position {
        match self.host.preferred_pos(id) {
            Some(pos) => Position::new(pos, pos + len(name)),
            None => Position::Unplaced,
        }
    }

    /// The trailing `name` of a selector: its last `len(name)` characters.
    pub fn trailing_span(&self, id: HostId, name: &str) -> Position {
        match self.end(id) {
            Some(end) => Position::new(end.saturating_sub(len(name)), end),
            None => Position::Unplaced,
        }
    }

    /// `[start, start + len(text))`.
    pub fn leading_span(&self, id: HostId, text: &str) -> Position {
        match self.start(id) {
            Some(start) => Position::new(start, start + len(text)),
            None => Position::Unplaced,
        }
    }
}

pub(crate) fn len(text: &str) -> u32 {
    text.len() as u32
}
