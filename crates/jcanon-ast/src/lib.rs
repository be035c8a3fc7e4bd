//! Canonical, toolchain-independent syntax tree.
//!
//! Nodes live in an [`Ast`] arena and are addressed by [`NodeId`]. Each node
//! has a [`NodeKind`] (payload only), a [`Position`], at most one [`Owner`],
//! children laid out by [`NodeKind::shape`], and auxiliary conversion tags
//! recording sub-spans that are not children of their own.

mod dump;
mod error;
mod kind;
mod list;
mod ops;
mod position;
mod tree;
mod walk;

pub use dump::dump;
pub use error::AstError;
pub use kind::{Child, ElementKind, Field, FloatingValue, IntegralValue, NodeKind};
pub use list::{RawList, RawListMut, StrictList, StrictListMut};
pub use ops::{BinaryOperator, Keyword, UnaryOperator, WildcardKind};
pub use position::Position;
pub use tree::{Ast, ChildValue, ListId, NodeId, Owner};
pub use walk::{containment_violations, ContainmentViolation, Descendants};

/// Conversion tag keys.
pub mod tags {
    use smol_str::SmolStr;

    /// Parentheses around a condition expression.
    pub const PARENS: &str = "parens";
    /// Angle-bracket section of explicit type arguments.
    pub const TYPE_ARGUMENTS: &str = "typeArguments";
    /// `this`, `super` or `class` keyword of a desugared reference.
    pub const KEYWORD: &str = "keyword";
    pub const VARARGS: &str = "varargs";
    pub const WILDCARD: &str = "wildcard";

    /// Bracket pair of the `n`-th extra dimension of a declarator.
    pub fn dimension(n: u32) -> SmolStr {
        SmolStr::new(format!("dimension.{n}"))
    }
}
