//! Expressions, including the sugar the host desugared away: explicit
//! constructor calls, `this`/`super` references, class literals and negative
//! integral literals.

use jcanon_ast::{
    tags, BinaryOperator, Field, FloatingValue, IntegralValue, NodeId, NodeKind, Position,
    UnaryOperator,
};
use jcanon_host::{names, HostId, HostLiteral, HostNode, HostTag, HostTreeAdapter};
use smol_str::SmolStr;

use crate::context::ConversionContext;
use crate::engine::Converter;
use crate::error::ConvertError;
use crate::operators::{binary_operator, unary_operator};

impl<'h, H: HostTreeAdapter + ?Sized> Converter<'h, H> {
    pub(crate) fn conditional(
        &mut self,
        cond: HostId,
        true_part: HostId,
        false_part: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::InlineIfExpression);
        self.convert_slot(node, Field::Condition, Some(cond), &plain)?;
        self.convert_slot(node, Field::IfTrue, Some(true_part), &plain)?;
        self.convert_slot(node, Field::IfFalse, Some(false_part), &plain)?;
        Ok(node)
    }

    /// A call. `this(...)` and `super(...)` are constructor invocations, not
    /// methods named after the keyword.
    pub(crate) fn apply(
        &mut self,
        type_args: &[HostId],
        meth: HostId,
        args: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let type_ctx = plain.clone().with_type_reference(true);

        let (node, type_field) = match self.host_node(meth) {
            HostNode::Ident { name } if name == names::THIS || name == names::SUPER => {
                let kind = if name == names::THIS {
                    NodeKind::AlternateConstructorInvocation
                } else {
                    NodeKind::SuperConstructorInvocation
                };
                let node = self.ast.alloc(kind);
                self.ast
                    .set_tag(node, tags::KEYWORD, self.positions.span(meth));
                (node, Field::ConstructorTypeArguments)
            }
            HostNode::Select { selected, name } if name == names::SUPER => {
                let node = self.ast.alloc(NodeKind::SuperConstructorInvocation);
                self.convert_slot(node, Field::Qualifier, Some(*selected), &plain)?;
                let keyword = self.positions.trailing_span(meth, name);
                self.ast.set_tag(node, tags::KEYWORD, keyword);
                (node, Field::ConstructorTypeArguments)
            }
            HostNode::Ident { name } => {
                let node = self.ast.alloc(NodeKind::MethodInvocation);
                let name_node = self.identifier(name, self.positions.span(meth));
                self.ast.set_child(node, Field::Name, Some(name_node))?;
                (node, Field::MethodTypeArguments)
            }
            HostNode::Select { selected, name } => {
                let node = self.ast.alloc(NodeKind::MethodInvocation);
                self.convert_slot(node, Field::Operand, Some(*selected), &plain)?;
                let name_node = self.identifier(name, self.positions.trailing_span(meth, name));
                self.ast.set_child(node, Field::Name, Some(name_node))?;
                (node, Field::MethodTypeArguments)
            }
            _ => return Err(self.unexpected("a method name", meth)),
        };
        self.fill_list(type_args, node, type_field, &type_ctx)?;
        self.tag_type_arguments(node, type_args);
        self.fill_list(args, node, Field::Arguments, &plain)?;
        Ok(node)
    }

    pub(crate) fn new_class(
        &mut self,
        encl: Option<HostId>,
        type_args: &[HostId],
        clazz: HostId,
        args: &[HostId],
        def: Option<HostId>,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let type_ctx = plain.clone().with_type_reference(true);
        let node = self.ast.alloc(NodeKind::ConstructorInvocation);
        self.convert_slot(node, Field::Qualifier, encl, &plain)?;
        self.fill_list(type_args, node, Field::ConstructorTypeArguments, &type_ctx)?;
        self.tag_type_arguments(node, type_args);
        self.convert_slot(node, Field::TypeReference, Some(clazz), &type_ctx)?;
        self.fill_list(args, node, Field::Arguments, &plain)?;

        if let Some(def) = def {
            let HostNode::ClassDef { defs, .. } = self.host_node(def) else {
                return Err(self.unexpected("an anonymous class body", def));
            };
            let member_ctx = plain
                .clone()
                .with_blocks_are_initializers(true)
                .with_skip_is_declaration(true);
            let body = self.alloc_at(NodeKind::NormalTypeBody, self.positions.span(def));
            self.fill_list(defs, body, Field::Members, &member_ctx)?;
            self.ast.set_child(node, Field::AnonymousClassBody, Some(body))?;
        }
        Ok(node)
    }

    /// Array creation. Brackets peeled off the element type and the
    /// dimension an initializer implies become size-less dimensions after
    /// the explicit ones.
    pub(crate) fn new_array(
        &mut self,
        id: HostId,
        elem_type: Option<HostId>,
        dims: &[HostId],
        elems: Option<&[HostId]>,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let Some(mut component) = elem_type else {
            let init = self.alloc_at(NodeKind::ArrayInitializer, self.positions.span(id));
            self.fill_list(elems.unwrap_or_default(), init, Field::Expressions, &plain)?;
            return Ok(init);
        };

        let mut peeled = 0u32;
        while let HostNode::ArrayType { elem_type } = self.host_node(component) {
            component = *elem_type;
            peeled += 1;
        }

        let node = self.ast.alloc(NodeKind::ArrayCreation);
        let type_ctx = plain.clone().with_type_reference(true);
        self.convert_slot(node, Field::ComponentTypeReference, Some(component), &type_ctx)?;
        for &dim in dims {
            let dimension = self.alloc_at(NodeKind::ArrayDimension, self.positions.span(dim));
            self.convert_slot(dimension, Field::Dimension, Some(dim), &plain)?;
            self.ast.push(node, Field::Dimensions, dimension)?;
        }
        let synthetic = peeled + u32::from(elems.is_some());
        for _ in 0..synthetic {
            let dimension = self.ast.alloc(NodeKind::ArrayDimension);
            self.ast.push(node, Field::Dimensions, dimension)?;
        }

        if let Some(elems) = elems {
            let init = self.alloc_at(NodeKind::ArrayInitializer, self.positions.span(id));
            self.fill_list(elems, init, Field::Expressions, &plain)?;
            self.ast.set_child(node, Field::Initializer, Some(init))?;
        }
        tracing::trace!(
            target: "jcanon.convert",
            explicit = dims.len(),
            synthetic,
            "array creation dimensions"
        );
        Ok(node)
    }

    /// Redundant parentheses do not get a node; they are recorded on the
    /// expression they enclose.
    pub(crate) fn parens(
        &mut self,
        id: HostId,
        expr: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let inner = self.convert_one(expr, ctx, "a parenthesized expression")?;
        self.ast.push_parens(inner, self.positions.span(id));
        Ok(inner)
    }

    pub(crate) fn assign(
        &mut self,
        lhs: HostId,
        rhs: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        self.binary_node(BinaryOperator::Assign, lhs, rhs, ctx)
    }

    pub(crate) fn binary(
        &mut self,
        id: HostId,
        tag: HostTag,
        lhs: HostId,
        rhs: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let operator = binary_operator(tag).ok_or_else(|| self.unexpected("a binary operator", id))?;
        self.binary_node(operator, lhs, rhs, ctx)
    }

    fn binary_node(
        &mut self,
        operator: BinaryOperator,
        lhs: HostId,
        rhs: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::BinaryExpression { operator });
        self.convert_slot(node, Field::Left, Some(lhs), &plain)?;
        self.convert_slot(node, Field::Right, Some(rhs), &plain)?;
        Ok(node)
    }

    pub(crate) fn unary(
        &mut self,
        id: HostId,
        tag: HostTag,
        arg: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let operator = unary_operator(tag).ok_or_else(|| self.unexpected("a unary operator", id))?;
        let node = self.ast.alloc(NodeKind::UnaryExpression { operator });
        self.convert_slot(node, Field::Operand, Some(arg), &ctx.fresh())?;
        Ok(node)
    }

    pub(crate) fn type_cast(
        &mut self,
        clazz: HostId,
        expr: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::Cast);
        let type_ctx = plain.clone().with_type_reference(true);
        self.convert_slot(node, Field::TypeReference, Some(clazz), &type_ctx)?;
        self.convert_slot(node, Field::Operand, Some(expr), &plain)?;
        Ok(node)
    }

    pub(crate) fn instance_of(
        &mut self,
        expr: HostId,
        clazz: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::InstanceOf);
        self.convert_slot(node, Field::ObjectReference, Some(expr), &plain)?;
        let type_ctx = plain.clone().with_type_reference(true);
        self.convert_slot(node, Field::TypeReference, Some(clazz), &type_ctx)?;
        Ok(node)
    }

    pub(crate) fn indexed(
        &mut self,
        indexed: HostId,
        index: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::ArrayAccess);
        self.convert_slot(node, Field::Operand, Some(indexed), &plain)?;
        self.convert_slot(node, Field::IndexExpression, Some(index), &plain)?;
        Ok(node)
    }

    pub(crate) fn literal(&mut self, id: HostId, value: &HostLiteral) -> Result<NodeId, ConvertError> {
        let kind = match value {
            HostLiteral::Int(v) => return self.integral(id, IntegralValue::Int(*v)),
            HostLiteral::Long(v) => return self.integral(id, IntegralValue::Long(*v)),
            HostLiteral::Float(v) => NodeKind::FloatingPointLiteral {
                value: FloatingValue::Float(*v),
            },
            HostLiteral::Double(v) => NodeKind::FloatingPointLiteral {
                value: FloatingValue::Double(*v),
            },
            HostLiteral::Boolean(v) => NodeKind::BooleanLiteral { value: *v },
            HostLiteral::Char(v) => NodeKind::CharLiteral { value: *v },
            HostLiteral::String(v) => NodeKind::StringLiteral { value: v.clone() },
            HostLiteral::Null => NodeKind::NullLiteral,
        };
        Ok(self.ast.alloc(kind))
    }

    /// Negative values are a minus sign over a non-negative literal, except
    /// the minimum value, whose magnitude does not fit the width.
    fn integral(&mut self, id: HostId, value: IntegralValue) -> Result<NodeId, ConvertError> {
        if !value.is_negative() || value.is_min_value() {
            return Ok(self.ast.alloc(NodeKind::IntegralLiteral { value }));
        }
        let magnitude = match value {
            IntegralValue::Int(v) => IntegralValue::Int(-v),
            IntegralValue::Long(v) => IntegralValue::Long(-v),
        };
        let span = self.positions.span(id);
        let literal_span = match span.start() {
            Some(start) => span.with_start(start + 1),
            None => Position::Unplaced,
        };
        let literal = self.alloc_at(NodeKind::IntegralLiteral { value: magnitude }, literal_span);
        let minus = self.alloc_at(
            NodeKind::UnaryExpression {
                operator: UnaryOperator::UnaryMinus,
            },
            span,
        );
        self.ast.set_child(minus, Field::Operand, Some(literal))?;
        Ok(minus)
    }

    pub(crate) fn ident(&mut self, id: HostId, name: &SmolStr) -> Result<NodeId, ConvertError> {
        let span = self.positions.span(id);
        let keyword = match name.as_str() {
            names::THIS => NodeKind::This,
            names::SUPER => NodeKind::Super,
            _ => {
                let node = self.ast.alloc(NodeKind::VariableReference);
                let name_node = self.identifier(name, span);
                self.ast.set_child(node, Field::Identifier, Some(name_node))?;
                return Ok(node);
            }
        };
        let node = self.ast.alloc(keyword);
        self.ast.set_tag(node, tags::KEYWORD, span);
        Ok(node)
    }

    /// A member selection, or `Outer.this`, `Outer.super` and `T.class`,
    /// whose qualifier names a type.
    pub(crate) fn select(
        &mut self,
        id: HostId,
        selected: HostId,
        name: &SmolStr,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let name_span = self.positions.trailing_span(id, name);
        let sugar = match name.as_str() {
            names::THIS => Some((NodeKind::This, Field::Qualifier)),
            names::SUPER => Some((NodeKind::Super, Field::Qualifier)),
            names::CLASS => Some((NodeKind::ClassLiteral, Field::TypeReference)),
            _ => None,
        };
        if let Some((kind, field)) = sugar {
            let node = self.ast.alloc(kind);
            let type_ctx = plain.with_type_reference(true);
            self.convert_slot(node, field, Some(selected), &type_ctx)?;
            self.ast.set_tag(node, tags::KEYWORD, name_span);
            return Ok(node);
        }

        let node = self.ast.alloc(NodeKind::Select);
        self.convert_slot(node, Field::Operand, Some(selected), &plain)?;
        let name_node = self.identifier(name, name_span);
        self.ast.set_child(node, Field::Identifier, Some(name_node))?;
        Ok(node)
    }
}
