//! Host side of the conversion boundary: the front end's parse tree model.
//!
//! [`HostTreeAdapter`] is the capability the converter depends on;
//! [`HostTree`] is the in-memory implementation front ends hand over,
//! assembled with [`HostTreeBuilder`].

mod adapter;
mod flags;
mod node;
mod tree;

pub use adapter::{EndPosTable, HostTreeAdapter};
pub use flags::Flags;
pub use node::{BoundKind, HostId, HostLiteral, HostNode, HostTag, PrimitiveTag};
pub use tree::{HostTree, HostTreeBuilder};

/// Names the host uses with special meaning.
pub mod names {
    pub const THIS: &str = "this";
    pub const SUPER: &str = "super";
    pub const CLASS: &str = "class";
    /// Method name of every constructor.
    pub const INIT: &str = "<init>";
    /// Last segment of an on-demand import.
    pub const STAR: &str = "*";
}
