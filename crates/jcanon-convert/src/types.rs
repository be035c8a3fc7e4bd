//! Type references.
//!
//! A host type is a chain of wrappers (array, generic application,
//! qualification, wildcard) around a name. The canonical reference is flat:
//! name parts with their type arguments, a dimension count and a wildcard
//! kind. It is assembled in one piece and placed once with the outermost
//! host span.

use jcanon_ast::{tags, Field, NodeId, NodeKind, Position, WildcardKind};
use jcanon_host::{BoundKind, HostId, HostNode, HostTreeAdapter};

use crate::context::ConversionContext;
use crate::engine::Converter;
use crate::error::ConvertError;

#[derive(Default)]
struct TypeShape {
    parts: Vec<NodeId>,
    array_dimensions: u32,
    wildcard: WildcardKind,
    wildcard_span: Position,
    /// End of the enclosing generic application, taken by the next name
    /// part so that it runs to the closing `>`.
    part_end: Option<u32>,
}

impl TypeShape {
    fn part_span(&mut self, span: Position) -> Position {
        match self.part_end.take() {
            Some(end) => span.with_end(end),
            None => span,
        }
    }
}

fn wildcard_kind(kind: BoundKind) -> WildcardKind {
    match kind {
        BoundKind::Unbound => WildcardKind::Unbound,
        BoundKind::Extends => WildcardKind::Extends,
        BoundKind::Super => WildcardKind::Super,
    }
}

impl<'h, H: HostTreeAdapter + ?Sized> Converter<'h, H> {
    pub(crate) fn type_reference(
        &mut self,
        id: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let mut shape = TypeShape::default();
        self.collect_type(id, &mut shape, ctx)?;
        let node = self.ast.alloc(NodeKind::TypeReference {
            wildcard: shape.wildcard,
            array_dimensions: shape.array_dimensions,
        });
        for part in shape.parts {
            self.ast.push(node, Field::Parts, part)?;
        }
        self.ast.set_tag(node, tags::WILDCARD, shape.wildcard_span);
        Ok(node)
    }

    fn type_part(&mut self, name: &str, span: Position) -> Result<NodeId, ConvertError> {
        let identifier = self.identifier(name, span);
        let part = self.alloc_at(NodeKind::TypeReferencePart, span);
        self.ast.set_child(part, Field::Identifier, Some(identifier))?;
        Ok(part)
    }

    fn collect_type(
        &mut self,
        id: HostId,
        shape: &mut TypeShape,
        ctx: &ConversionContext,
    ) -> Result<(), ConvertError> {
        self.check_depth(id, ctx.depth)?;
        let inner_ctx = ctx.descend();
        match self.host_node(id) {
            HostNode::Ident { name } => {
                let span = shape.part_span(self.positions.span(id));
                let part = self.type_part(name, span)?;
                shape.parts.push(part);
            }
            HostNode::PrimitiveType { tag } => {
                let span = shape.part_span(self.positions.span(id));
                let part = self.type_part(tag.keyword(), span)?;
                shape.parts.push(part);
            }
            HostNode::Select { selected, name } => {
                let part_end = shape.part_end.take();
                self.collect_type(*selected, shape, &inner_ctx)?;
                shape.part_end = part_end;
                let span = shape.part_span(self.positions.trailing_span(id, name));
                let part = self.type_part(name, span)?;
                shape.parts.push(part);
            }
            HostNode::TypeApply { clazz, arguments } => {
                // The last part runs to the closing `>`.
                let outer_end = std::mem::replace(&mut shape.part_end, self.positions.end(id));
                let collected = self.collect_type(*clazz, shape, &inner_ctx);
                shape.part_end = outer_end;
                collected?;
                let Some(&part) = shape.parts.last() else {
                    return Err(self.unexpected("a generic type name", *clazz));
                };
                let arg_ctx = inner_ctx.fresh().with_type_reference(true);
                for &argument in arguments {
                    let reference = self.convert_one(argument, &arg_ctx, "a type argument")?;
                    self.ast.push(part, Field::TypeArguments, reference)?;
                }
                self.tag_type_arguments(part, arguments);
            }
            HostNode::ArrayType { elem_type } => {
                self.collect_type(*elem_type, shape, &inner_ctx)?;
                shape.array_dimensions += 1;
            }
            HostNode::Wildcard {
                kind,
                kind_node,
                inner,
            } => {
                shape.wildcard = wildcard_kind(*kind);
                shape.wildcard_span = match kind_node {
                    Some(kind_node) => self.positions.span(*kind_node),
                    None => Position::Unplaced,
                };
                if shape.wildcard_span.is_unplaced() {
                    tracing::debug!(
                        target: "jcanon.position",
                        bound = kind.token(),
                        "wildcard bound kind has no position"
                    );
                }
                if let Some(inner) = inner {
                    self.collect_type(*inner, shape, &inner_ctx)?;
                }
            }
            HostNode::Erroneous | HostNode::Unknown { .. } => {
                return Err(ConvertError::UnsupportedKind {
                    kind: self.kind_name(id),
                    host: id,
                })
            }
            _ => return Err(self.unexpected("a type", id)),
        }
        Ok(())
    }
}
