use crate::kind::{ElementKind, Field};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    #[error("{kind} has no child named `{field}`")]
    NoSuchField { kind: &'static str, field: Field },
    #[error("`{field}` of {kind} is a single slot, not a list")]
    NotAList { kind: &'static str, field: Field },
    #[error("`{field}` of {kind} is a list, not a single slot")]
    NotASlot { kind: &'static str, field: Field },
    #[error("list of {expected} cannot hold a {found}")]
    ElementKindMismatch {
        expected: ElementKind,
        found: &'static str,
    },
    #[error("adopting the node would make it its own ancestor")]
    WouldCreateCycle,
}
