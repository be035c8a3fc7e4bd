//! Raw and strict views over a child list.
//!
//! Both views borrow the same backing sequence inside [`Ast`]; converting one
//! into the other never copies. The raw view accepts any node (construction
//! and recovery), the strict view only nodes its [`ElementKind`] accepts.

use crate::error::AstError;
use crate::kind::{ElementKind, Field};
use crate::tree::{Ast, ListId, NodeId};

#[derive(Clone, Copy)]
pub struct RawList<'a> {
    ast: &'a Ast,
    list: ListId,
}

impl<'a> RawList<'a> {
    pub(crate) fn new(ast: &'a Ast, list: ListId) -> Self {
        Self { ast, list }
    }

    pub fn id(&self) -> ListId {
        self.list
    }

    pub fn owner(&self) -> NodeId {
        self.ast.list_data(self.list).owner
    }

    pub fn field(&self) -> Field {
        self.ast.list_data(self.list).field
    }

    pub fn element(&self) -> ElementKind {
        self.ast.list_data(self.list).element
    }

    pub fn as_slice(&self) -> &'a [NodeId] {
        &self.ast.list_data(self.list).items
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.as_slice().get(index).copied()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.as_slice().first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.as_slice().last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + 'a {
        self.as_slice().iter().copied()
    }

    pub fn as_strict(&self) -> StrictList<'a> {
        StrictList::new(self.ast, self.list)
    }
}

pub struct RawListMut<'a> {
    ast: &'a mut Ast,
    list: ListId,
}

impl<'a> RawListMut<'a> {
    pub(crate) fn new(ast: &'a mut Ast, list: ListId) -> Self {
        Self { ast, list }
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.ast.list_data(self.list).items
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Appends `child`, detaching it from its previous owner first.
    pub fn push(&mut self, child: NodeId) -> Result<(), AstError> {
        let end = self.len();
        self.ast.list_insert(self.list, end, child)
    }

    pub fn push_front(&mut self, child: NodeId) -> Result<(), AstError> {
        self.ast.list_insert(self.list, 0, child)
    }

    pub fn insert(&mut self, index: usize, child: NodeId) -> Result<(), AstError> {
        self.ast.list_insert(self.list, index, child)
    }

    pub fn extend(&mut self, children: impl IntoIterator<Item = NodeId>) -> Result<(), AstError> {
        for child in children {
            self.push(child)?;
        }
        Ok(())
    }

    /// Removes and disowns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Option<NodeId> {
        self.ast.list_remove(self.list, index)
    }

    pub fn clear(&mut self) {
        while self.ast.list_remove(self.list, 0).is_some() {}
    }

    pub fn into_strict(self) -> StrictListMut<'a> {
        StrictListMut::new(self.ast, self.list)
    }
}

#[derive(Clone, Copy)]
pub struct StrictList<'a> {
    ast: &'a Ast,
    list: ListId,
}

impl<'a> StrictList<'a> {
    pub(crate) fn new(ast: &'a Ast, list: ListId) -> Self {
        Self { ast, list }
    }

    pub fn element(&self) -> ElementKind {
        self.ast.list_data(self.list).element
    }

    /// Elements the list's element kind accepts, skipping any foreign node
    /// that was put in through the raw view.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + 'a {
        let ast = self.ast;
        let element = self.element();
        ast.list_data(self.list)
            .items
            .iter()
            .copied()
            .filter(move |&id| element.accepts(ast.kind(id)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Whether every element, as seen through the raw view, is acceptable.
    pub fn is_valid(&self) -> bool {
        self.len() == self.as_raw().len()
    }

    pub fn as_raw(&self) -> RawList<'a> {
        RawList::new(self.ast, self.list)
    }
}

pub struct StrictListMut<'a> {
    ast: &'a mut Ast,
    list: ListId,
}

impl<'a> StrictListMut<'a> {
    pub(crate) fn new(ast: &'a mut Ast, list: ListId) -> Self {
        Self { ast, list }
    }

    fn check(&self, child: NodeId) -> Result<(), AstError> {
        let element = self.ast.list_data(self.list).element;
        let kind = self.ast.kind(child);
        if element.accepts(kind) {
            Ok(())
        } else {
            Err(AstError::ElementKindMismatch {
                expected: element,
                found: kind.name(),
            })
        }
    }

    pub fn push(&mut self, child: NodeId) -> Result<(), AstError> {
        self.check(child)?;
        let end = self.ast.list_data(self.list).items.len();
        self.ast.list_insert(self.list, end, child)
    }

    pub fn insert(&mut self, index: usize, child: NodeId) -> Result<(), AstError> {
        self.check(child)?;
        self.ast.list_insert(self.list, index, child)
    }

    pub fn remove(&mut self, index: usize) -> Option<NodeId> {
        self.ast.list_remove(self.list, index)
    }

    pub fn into_raw(self) -> RawListMut<'a> {
        RawListMut::new(self.ast, self.list)
    }
}
