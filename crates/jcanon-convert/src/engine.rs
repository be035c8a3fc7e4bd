use jcanon_ast::{Ast, Field, NodeId, NodeKind, Position};
use jcanon_host::{EndPosTable, Flags, HostId, HostNode, HostTreeAdapter};

use crate::context::ConversionContext;
use crate::error::ConvertError;
use crate::position::Reconciler;

/// Knobs of the conversion engine that are not per-call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Host nesting depth at which conversion fails instead of recursing on.
    pub max_nesting_depth: u32,
    /// Whether runs of declarators sharing a modifiers node fold into one
    /// definition.
    pub fold_declarators: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: 128,
            fold_declarators: true,
        }
    }
}

/// Converts host nodes into canonical nodes inside one [`Ast`].
pub struct Converter<'h, H: HostTreeAdapter + ?Sized> {
    pub(crate) host: &'h H,
    pub(crate) positions: Reconciler<'h, H>,
    pub(crate) options: EngineOptions,
    pub(crate) ast: Ast,
}

impl<'h, H: HostTreeAdapter + ?Sized> Converter<'h, H> {
    pub fn new(host: &'h H, ends: &'h EndPosTable, options: EngineOptions) -> Self {
        Self::with_ast(host, ends, options, Ast::new())
    }

    /// Continues building into an existing tree.
    pub fn with_ast(host: &'h H, ends: &'h EndPosTable, options: EngineOptions, ast: Ast) -> Self {
        Self {
            host,
            positions: Reconciler::new(host, ends),
            options,
            ast,
        }
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn into_ast(self) -> Ast {
        self.ast
    }

    /// Converts one host node into zero or one canonical node, stamping the
    /// host span onto the result unless a more specific rule already placed
    /// it.
    pub fn convert(
        &mut self,
        id: HostId,
        ctx: &ConversionContext,
    ) -> Result<Option<NodeId>, ConvertError> {
        self.check_depth(id, ctx.depth)?;
        let ctx = ctx.descend();
        tracing::trace!(
            target: "jcanon.convert",
            kind = self.host.kind_name(id),
            depth = ctx.depth,
            "converting host node"
        );
        let result = self.dispatch(id, &ctx)?;
        if let Some(node) = result {
            self.stamp(id, node);
        }
        Ok(result)
    }

    /// Converts every host node of `items` into the list `field` of `parent`,
    /// folding runs of declarators.
    pub fn convert_into_list(
        &mut self,
        items: &[HostId],
        parent: NodeId,
        field: Field,
        ctx: &ConversionContext,
    ) -> Result<(), ConvertError> {
        self.fill_list(items, parent, field, ctx)
    }

    pub(crate) fn check_depth(&self, id: HostId, depth: u32) -> Result<(), ConvertError> {
        if depth >= self.options.max_nesting_depth {
            return Err(ConvertError::NestingTooDeep {
                limit: self.options.max_nesting_depth,
                host: id,
            });
        }
        Ok(())
    }

    pub(crate) fn host_node(&self, id: HostId) -> &'h HostNode {
        self.host.node(id)
    }

    pub(crate) fn kind_name(&self, id: HostId) -> String {
        self.host.kind_name(id).to_string()
    }

    pub(crate) fn convert_one(
        &mut self,
        id: HostId,
        ctx: &ConversionContext,
        context: &'static str,
    ) -> Result<NodeId, ConvertError> {
        self.convert(id, ctx)?
            .ok_or(ConvertError::MissingResult { context, host: id })
    }

    pub(crate) fn convert_opt(
        &mut self,
        id: Option<HostId>,
        ctx: &ConversionContext,
        context: &'static str,
    ) -> Result<Option<NodeId>, ConvertError> {
        id.map(|id| self.convert_one(id, ctx, context)).transpose()
    }

    /// Converts `host` (if any) into the slot `field` of `parent`.
    pub(crate) fn convert_slot(
        &mut self,
        parent: NodeId,
        field: Field,
        host: Option<HostId>,
        ctx: &ConversionContext,
    ) -> Result<(), ConvertError> {
        let child = self.convert_opt(host, ctx, field.name())?;
        self.ast.set_child(parent, field, child)?;
        Ok(())
    }

    pub(crate) fn stamp(&mut self, host: HostId, node: NodeId) {
        let span = self.positions.span(host);
        if span.is_unplaced() && self.ast.position(node).is_unplaced() {
            tracing::debug!(
                target: "jcanon.position",
                kind = self.host.kind_name(host),
                "no position for host node"
            );
        }
        self.ast.place_if_unplaced(node, span);
    }

    pub(crate) fn alloc_at(&mut self, kind: NodeKind, position: Position) -> NodeId {
        self.ast.alloc_at(kind, position)
    }

    pub(crate) fn identifier(&mut self, name: &str, position: Position) -> NodeId {
        self.ast.alloc_at(NodeKind::identifier(name), position)
    }

    pub(crate) fn unexpected(&self, expected: &'static str, id: HostId) -> ConvertError {
        ConvertError::UnexpectedShape {
            expected,
            found: self.kind_name(id),
            host: id,
        }
    }

    /// The flag set of a modifiers node.
    pub(crate) fn modifier_flags(&self, id: HostId) -> Result<Flags, ConvertError> {
        match self.host_node(id) {
            HostNode::Modifiers { flags, .. } => Ok(*flags),
            _ => Err(self.unexpected("modifiers", id)),
        }
    }

    fn dispatch(
        &mut self,
        id: HostId,
        ctx: &ConversionContext,
    ) -> Result<Option<NodeId>, ConvertError> {
        let node = match self.host_node(id) {
            HostNode::TopLevel {
                package_annotations,
                package,
                defs,
            } => self.top_level(package_annotations, *package, defs, ctx)?,
            HostNode::Import { qualid, is_static } => self.import(*qualid, *is_static)?,
            HostNode::ClassDef { .. } => self.class_def(id, ctx)?,
            HostNode::MethodDef { .. } => self.method_def(id, ctx)?,
            HostNode::VarDef { .. } => self.fold_run(id, &[], ctx)?,
            HostNode::Modifiers { flags, annotations } => self.modifiers(*flags, annotations, ctx)?,
            HostNode::Annotation {
                annotation_type,
                args,
            } => self.annotation(*annotation_type, args, ctx)?,
            HostNode::TypeParameter { name, bounds } => self.type_parameter(id, name, bounds, ctx)?,

            HostNode::Skip => {
                let kind = if ctx.skip_is_declaration {
                    NodeKind::EmptyDeclaration
                } else {
                    NodeKind::EmptyStatement
                };
                self.ast.alloc(kind)
            }
            HostNode::Block { flags, stats } => self.block(id, *flags, stats, ctx)?,
            HostNode::DoLoop { body, cond } => self.do_loop(*body, *cond, ctx)?,
            HostNode::WhileLoop { cond, body } => self.while_loop(*cond, *body, ctx)?,
            HostNode::ForLoop {
                init,
                cond,
                step,
                body,
            } => self.for_loop(init, *cond, step, *body, ctx)?,
            HostNode::ForeachLoop { var, expr, body } => {
                self.foreach_loop(*var, *expr, *body, ctx)?
            }
            HostNode::Labelled { label, body } => self.labelled(id, label, *body, ctx)?,
            HostNode::Switch { selector, cases } => self.switch(*selector, cases, ctx)?,
            HostNode::Case { .. } => return Err(self.unexpected("a switch statement", id)),
            HostNode::Synchronized { lock, body } => self.synchronized(*lock, *body, ctx)?,
            HostNode::Try {
                body,
                catchers,
                finalizer,
            } => self.try_statement(*body, catchers, *finalizer, ctx)?,
            HostNode::Catch { param, body } => self.catch(*param, *body, ctx)?,
            HostNode::If {
                cond,
                then_part,
                else_part,
            } => self.if_statement(*cond, *then_part, *else_part, ctx)?,
            HostNode::Exec { expr } => self.exec(*expr, ctx)?,
            HostNode::Break { label } => self.jump(NodeKind::Break, label.as_deref())?,
            HostNode::Continue { label } => self.jump(NodeKind::Continue, label.as_deref())?,
            HostNode::Return { expr } => {
                let node = self.ast.alloc(NodeKind::Return);
                self.convert_slot(node, Field::Value, *expr, &ctx.fresh())?;
                node
            }
            HostNode::Throw { expr } => {
                let node = self.ast.alloc(NodeKind::Throw);
                self.convert_slot(node, Field::Throwable, Some(*expr), &ctx.fresh())?;
                node
            }
            HostNode::Assert { cond, detail } => {
                let node = self.ast.alloc(NodeKind::Assert);
                self.convert_slot(node, Field::Assertion, Some(*cond), &ctx.fresh())?;
                self.convert_slot(node, Field::Message, *detail, &ctx.fresh())?;
                node
            }

            HostNode::Conditional {
                cond,
                true_part,
                false_part,
            } => self.conditional(*cond, *true_part, *false_part, ctx)?,
            HostNode::Apply {
                type_args,
                meth,
                args,
            } => self.apply(type_args, *meth, args, ctx)?,
            HostNode::NewClass {
                encl,
                type_args,
                clazz,
                args,
                def,
            } => self.new_class(*encl, type_args, *clazz, args, *def, ctx)?,
            HostNode::NewArray {
                elem_type,
                dims,
                elems,
            } => self.new_array(id, *elem_type, dims, elems.as_deref(), ctx)?,
            HostNode::Parens { expr } => self.parens(id, *expr, ctx)?,
            HostNode::Assign { lhs, rhs } => self.assign(*lhs, *rhs, ctx)?,
            HostNode::AssignOp { tag, lhs, rhs } | HostNode::Binary { tag, lhs, rhs } => {
                self.binary(id, *tag, *lhs, *rhs, ctx)?
            }
            HostNode::Unary { tag, arg } => self.unary(id, *tag, *arg, ctx)?,
            HostNode::TypeCast { clazz, expr } => self.type_cast(*clazz, *expr, ctx)?,
            HostNode::InstanceOf { expr, clazz } => self.instance_of(*expr, *clazz, ctx)?,
            HostNode::Indexed { indexed, index } => self.indexed(*indexed, *index, ctx)?,
            HostNode::Literal { value } => self.literal(id, value)?,

            HostNode::Ident { .. } | HostNode::Select { .. } if ctx.type_reference => {
                self.type_reference(id, ctx)?
            }
            HostNode::Ident { name } => self.ident(id, name)?,
            HostNode::Select { selected, name } => self.select(id, *selected, name, ctx)?,
            HostNode::PrimitiveType { .. }
            | HostNode::ArrayType { .. }
            | HostNode::TypeApply { .. }
            | HostNode::Wildcard { .. } => self.type_reference(id, ctx)?,
            // A bound kind is a token of its wildcard, not a node of its own.
            HostNode::TypeBoundKind { .. } => return Ok(None),

            HostNode::Erroneous | HostNode::Unknown { .. } => {
                return Err(ConvertError::UnsupportedKind {
                    kind: self.kind_name(id),
                    host: id,
                })
            }
        };
        Ok(Some(node))
    }
}
