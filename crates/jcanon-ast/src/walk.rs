use crate::position::Position;
use crate::tree::{Ast, NodeId};

/// Pre-order traversal of a subtree, root first.
pub struct Descendants<'a> {
    ast: &'a Ast,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = self.ast.children(id);
        self.stack.extend(children.into_iter().rev());
        Some(id)
    }
}

impl Ast {
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            ast: self,
            stack: vec![root],
        }
    }
}

/// A placed child whose span escapes its placed parent's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainmentViolation {
    pub parent: NodeId,
    pub parent_position: Position,
    pub child: NodeId,
    pub child_position: Position,
}

/// Every parent/child pair under `root` where both are placed and the child
/// does not lie within the parent. Pairs with an unplaced side are skipped.
pub fn containment_violations(ast: &Ast, root: NodeId) -> Vec<ContainmentViolation> {
    let mut out = Vec::new();
    for parent in ast.descendants(root) {
        let parent_position = ast.position(parent);
        if parent_position.is_unplaced() {
            continue;
        }
        for child in ast.children(parent) {
            let child_position = ast.position(child);
            if !child_position.is_unplaced() && !parent_position.contains(child_position) {
                out.push(ContainmentViolation {
                    parent,
                    parent_position,
                    child,
                    child_position,
                });
            }
        }
    }
    out
}
