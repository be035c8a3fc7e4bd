use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

use crate::error::AstError;
use crate::kind::{Child, ElementKind, Field, NodeKind};
use crate::list::{RawList, RawListMut, StrictList, StrictListMut};
use crate::position::Position;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_raw(raw: usize) -> Self {
        NodeId(raw as u32)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(u32);

impl ListId {
    pub(crate) fn from_raw(raw: usize) -> Self {
        ListId(raw as u32)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListId({})", self.0)
    }
}

/// Where a node currently hangs in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Slot { parent: NodeId, field: Field },
    List { list: ListId },
}

/// The content of one entry of a node's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildValue {
    Slot(Option<NodeId>),
    List(ListId),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    position: Position,
    owner: Option<Owner>,
    /// Aligned with `kind.shape()`.
    children: Vec<ChildValue>,
    tags: BTreeMap<SmolStr, Position>,
    parens: Vec<Position>,
}

#[derive(Debug, Clone)]
pub(crate) struct ListData {
    pub(crate) owner: NodeId,
    pub(crate) field: Field,
    pub(crate) element: ElementKind,
    pub(crate) items: Vec<NodeId>,
}

/// Arena holding a canonical tree (or a forest of detached subtrees).
///
/// Every node has at most one owner. Adopting a node into a slot or list
/// first detaches it from wherever it was, so moving is the only way to
/// share structure.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    nodes: Vec<NodeData>,
    lists: Vec<ListData>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len());
        let lists = &mut self.lists;
        let children = kind
            .shape()
            .iter()
            .map(|child| match *child {
                Child::Slot(_) => ChildValue::Slot(None),
                Child::List(field, element) => {
                    let list = ListId::from_raw(lists.len());
                    lists.push(ListData {
                        owner: id,
                        field,
                        element,
                        items: Vec::new(),
                    });
                    ChildValue::List(list)
                }
            })
            .collect();
        self.nodes.push(NodeData {
            kind,
            position: Position::Unplaced,
            owner: None,
            children,
            tags: BTreeMap::new(),
            parens: Vec::new(),
        });
        id
    }

    pub fn alloc_at(&mut self, kind: NodeKind, position: Position) -> NodeId {
        let id = self.alloc(kind);
        self.nodes[id.idx()].position = position;
        id
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.idx()].kind
    }

    /// Edits a node's payload. The edit must not change the node's shape.
    pub fn update_kind(&mut self, id: NodeId, update: impl FnOnce(&mut NodeKind)) {
        let kind = &mut self.nodes[id.idx()].kind;
        let shape = kind.shape();
        update(kind);
        debug_assert_eq!(shape, kind.shape(), "payload edit changed the node shape");
    }

    pub fn position(&self, id: NodeId) -> Position {
        self.nodes[id.idx()].position
    }

    pub fn set_position(&mut self, id: NodeId, position: Position) {
        self.nodes[id.idx()].position = position;
    }

    /// Stamps `position` unless the node already has one. Returns whether
    /// the stamp took effect.
    pub fn place_if_unplaced(&mut self, id: NodeId, position: Position) -> bool {
        let node = &mut self.nodes[id.idx()];
        if node.position.is_unplaced() && !position.is_unplaced() {
            node.position = position;
            true
        } else {
            false
        }
    }

    pub fn owner(&self, id: NodeId) -> Option<Owner> {
        self.nodes[id.idx()].owner
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        match self.nodes[id.idx()].owner? {
            Owner::Slot { parent, .. } => Some(parent),
            Owner::List { list } => Some(self.lists[list.idx()].owner),
        }
    }

    /// Whether `ancestor` lies strictly above `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    fn field_index(&self, id: NodeId, field: Field) -> Result<usize, AstError> {
        let kind = &self.nodes[id.idx()].kind;
        kind.shape()
            .iter()
            .position(|child| child.field() == field)
            .ok_or(AstError::NoSuchField {
                kind: kind.name(),
                field,
            })
    }

    /// Content of a single-node slot; `None` when empty or when the kind has
    /// no such slot.
    pub fn child(&self, id: NodeId, field: Field) -> Option<NodeId> {
        let idx = self.field_index(id, field).ok()?;
        match self.nodes[id.idx()].children[idx] {
            ChildValue::Slot(child) => child,
            ChildValue::List(_) => None,
        }
    }

    /// Puts `child` into the slot, detaching it from its previous owner.
    /// The slot's previous occupant, now ownerless, is returned.
    pub fn set_child(
        &mut self,
        id: NodeId,
        field: Field,
        child: Option<NodeId>,
    ) -> Result<Option<NodeId>, AstError> {
        let idx = self.field_index(id, field)?;
        if let ChildValue::List(_) = self.nodes[id.idx()].children[idx] {
            return Err(AstError::NotASlot {
                kind: self.nodes[id.idx()].kind.name(),
                field,
            });
        }
        if let Some(child) = child {
            self.check_adoption(id, child)?;
            self.detach(child);
        }
        let previous = match &mut self.nodes[id.idx()].children[idx] {
            ChildValue::Slot(slot) => std::mem::replace(slot, child),
            ChildValue::List(_) => None,
        };
        if let Some(previous) = previous {
            self.nodes[previous.idx()].owner = None;
        }
        if let Some(child) = child {
            self.nodes[child.idx()].owner = Some(Owner::Slot { parent: id, field });
        }
        Ok(previous)
    }

    pub fn list_id(&self, id: NodeId, field: Field) -> Result<ListId, AstError> {
        let idx = self.field_index(id, field)?;
        match self.nodes[id.idx()].children[idx] {
            ChildValue::List(list) => Ok(list),
            ChildValue::Slot(_) => Err(AstError::NotAList {
                kind: self.nodes[id.idx()].kind.name(),
                field,
            }),
        }
    }

    /// Members of a child list; empty when the kind has no such list.
    pub fn items(&self, id: NodeId, field: Field) -> &[NodeId] {
        match self.list_id(id, field) {
            Ok(list) => &self.lists[list.idx()].items,
            Err(_) => &[],
        }
    }

    /// Appends through the raw view.
    pub fn push(&mut self, id: NodeId, field: Field, child: NodeId) -> Result<(), AstError> {
        let list = self.list_id(id, field)?;
        self.raw_list_mut(list).push(child)
    }

    pub fn raw_list(&self, list: ListId) -> RawList<'_> {
        RawList::new(self, list)
    }

    pub fn raw_list_mut(&mut self, list: ListId) -> RawListMut<'_> {
        RawListMut::new(self, list)
    }

    pub fn strict_list(&self, list: ListId) -> StrictList<'_> {
        StrictList::new(self, list)
    }

    pub fn strict_list_mut(&mut self, list: ListId) -> StrictListMut<'_> {
        StrictListMut::new(self, list)
    }

    /// Removes the node from its owner, leaving the owner's other children in
    /// order. Returns the former owner.
    pub fn detach(&mut self, id: NodeId) -> Option<Owner> {
        let owner = self.nodes[id.idx()].owner.take()?;
        match owner {
            Owner::Slot { parent, field } => {
                if let Ok(idx) = self.field_index(parent, field) {
                    if let ChildValue::Slot(slot) = &mut self.nodes[parent.idx()].children[idx] {
                        if *slot == Some(id) {
                            *slot = None;
                        }
                    }
                }
            }
            Owner::List { list } => {
                let items = &mut self.lists[list.idx()].items;
                if let Some(pos) = items.iter().position(|&item| item == id) {
                    items.remove(pos);
                }
            }
        }
        Some(owner)
    }

    /// Puts `new` exactly where `old` is and leaves `old` ownerless. Does
    /// nothing when `old` has no owner.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> Result<(), AstError> {
        if old == new {
            return Ok(());
        }
        let Some(owner) = self.nodes[old.idx()].owner else {
            return Ok(());
        };
        match owner {
            Owner::Slot { parent, field } => {
                self.set_child(parent, field, Some(new))?;
            }
            Owner::List { list } => {
                let parent = self.lists[list.idx()].owner;
                self.check_adoption(parent, new)?;
                self.detach(new);
                let items = &mut self.lists[list.idx()].items;
                if let Some(pos) = items.iter().position(|&item| item == old) {
                    items[pos] = new;
                }
                self.nodes[new.idx()].owner = Some(Owner::List { list });
                self.nodes[old.idx()].owner = None;
            }
        }
        Ok(())
    }

    pub(crate) fn check_adoption(&self, parent: NodeId, child: NodeId) -> Result<(), AstError> {
        let cycle = child == parent || self.is_ancestor(child, parent);
        debug_assert!(!cycle, "{child:?} cannot be adopted by its own descendant {parent:?}");
        if cycle {
            return Err(AstError::WouldCreateCycle);
        }
        Ok(())
    }

    pub(crate) fn list_data(&self, list: ListId) -> &ListData {
        &self.lists[list.idx()]
    }

    pub(crate) fn list_insert(
        &mut self,
        list: ListId,
        index: usize,
        child: NodeId,
    ) -> Result<(), AstError> {
        let parent = self.lists[list.idx()].owner;
        self.check_adoption(parent, child)?;
        let mut index = index;
        if let Some(Owner::List { list: current }) = self.nodes[child.idx()].owner {
            if current == list {
                let items = &self.lists[list.idx()].items;
                if let Some(pos) = items.iter().position(|&item| item == child) {
                    if pos < index {
                        index -= 1;
                    }
                }
            }
        }
        self.detach(child);
        let items = &mut self.lists[list.idx()].items;
        let index = index.min(items.len());
        items.insert(index, child);
        self.nodes[child.idx()].owner = Some(Owner::List { list });
        Ok(())
    }

    pub(crate) fn list_remove(&mut self, list: ListId, index: usize) -> Option<NodeId> {
        let items = &mut self.lists[list.idx()].items;
        if index >= items.len() {
            return None;
        }
        let removed = items.remove(index);
        self.nodes[removed.idx()].owner = None;
        Some(removed)
    }

    pub fn tag(&self, id: NodeId, key: &str) -> Option<Position> {
        self.nodes[id.idx()].tags.get(key).copied()
    }

    /// Records an auxiliary sub-span. Unknown positions are not recorded.
    pub fn set_tag(&mut self, id: NodeId, key: impl Into<SmolStr>, position: Position) {
        if position.is_unplaced() {
            return;
        }
        self.nodes[id.idx()].tags.insert(key.into(), position);
    }

    pub fn tags(&self, id: NodeId) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.nodes[id.idx()]
            .tags
            .iter()
            .map(|(key, position)| (key.as_str(), *position))
    }

    /// Spans of redundant parentheses around the node, innermost first.
    pub fn parens(&self, id: NodeId) -> &[Position] {
        &self.nodes[id.idx()].parens
    }

    pub fn push_parens(&mut self, id: NodeId, position: Position) {
        self.nodes[id.idx()].parens.push(position);
    }

    /// Shape entries paired with their current content, in source order.
    pub fn entries(&self, id: NodeId) -> impl Iterator<Item = (Field, ChildValue)> + '_ {
        let node = &self.nodes[id.idx()];
        node.kind
            .shape()
            .iter()
            .zip(node.children.iter())
            .map(|(child, value)| (child.field(), *value))
    }

    /// Direct children in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for (_, value) in self.entries(id) {
            match value {
                ChildValue::Slot(Some(child)) => out.push(child),
                ChildValue::Slot(None) => {}
                ChildValue::List(list) => out.extend_from_slice(&self.lists[list.idx()].items),
            }
        }
        out
    }
}
