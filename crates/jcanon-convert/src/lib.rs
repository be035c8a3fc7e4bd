//! Tree normalization: host parse tree in, canonical [`Ast`] out.
//!
//! Conversion is a single recursive pass driven by [`Converter::convert`].
//! Each call receives an explicit [`ConversionContext`]; the host tree and
//! its end-position side table are only read. Positions are reconciled per
//! node (see [`Reconciler`]) and runs of declarators that share a modifiers
//! node fold into one definition.
//!
//! Every failure is fatal and surfaces as a [`ConvertError`]: an
//! unrecognized host kind means the front end and the engine disagree about
//! the tree format, not that the source is malformed.

mod context;
mod declarations;
mod engine;
mod error;
mod expressions;
mod folding;
mod operators;
mod position;
mod statements;
mod types;

use jcanon_ast::{Ast, Field, NodeId};
use jcanon_host::{EndPosTable, HostId, HostTreeAdapter};

pub use context::ConversionContext;
pub use declarations::keywords_of;
pub use engine::{Converter, EngineOptions};
pub use error::ConvertError;
pub use operators::{binary_operator, host_binary_tag, host_unary_tag, unary_operator};
pub use position::Reconciler;

/// Result of converting one host root.
#[derive(Debug, Clone)]
pub struct Converted {
    pub ast: Ast,
    /// `None` when the host node has no canonical counterpart.
    pub root: Option<NodeId>,
}

/// Converts the subtree rooted at `root` with default engine options.
pub fn convert<H: HostTreeAdapter + ?Sized>(
    host: &H,
    root: HostId,
    ctx: &ConversionContext,
    ends: &EndPosTable,
) -> Result<Converted, ConvertError> {
    convert_with_options(host, root, ctx, ends, &EngineOptions::default())
}

pub fn convert_with_options<H: HostTreeAdapter + ?Sized>(
    host: &H,
    root: HostId,
    ctx: &ConversionContext,
    ends: &EndPosTable,
    options: &EngineOptions,
) -> Result<Converted, ConvertError> {
    let mut converter = Converter::new(host, ends, *options);
    match converter.convert(root, ctx) {
        Ok(root) => Ok(Converted {
            ast: converter.into_ast(),
            root,
        }),
        Err(err) => {
            tracing::error!(
                target: "jcanon.convert",
                root = host.kind_name(root),
                error = %err,
                "unsupported construct"
            );
            Err(err)
        }
    }
}

/// Converts `items` into the list `field` of `parent`, an existing node of
/// `ast`, folding declarator runs. On error `ast` keeps whatever was built
/// before the failure.
#[allow(clippy::too_many_arguments)]
pub fn convert_into_list<H: HostTreeAdapter + ?Sized>(
    host: &H,
    items: &[HostId],
    ctx: &ConversionContext,
    ends: &EndPosTable,
    options: &EngineOptions,
    ast: &mut Ast,
    parent: NodeId,
    field: Field,
) -> Result<(), ConvertError> {
    let mut converter = Converter::with_ast(host, ends, *options, std::mem::take(ast));
    let result = converter.convert_into_list(items, parent, field, ctx);
    *ast = converter.into_ast();
    if let Err(err) = &result {
        tracing::error!(
            target: "jcanon.convert",
            items = items.len(),
            error = %err,
            "unsupported construct"
        );
    }
    result
}
