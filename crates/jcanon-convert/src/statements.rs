//! Blocks, initializers and statements.

use jcanon_ast::{tags, Field, NodeId, NodeKind, Position};
use jcanon_host::{Flags, HostId, HostNode, HostTreeAdapter};
use smol_str::SmolStr;

use crate::context::ConversionContext;
use crate::engine::Converter;
use crate::error::ConvertError;

impl<'h, H: HostTreeAdapter + ?Sized> Converter<'h, H> {
    /// A brace-delimited statement list. Inside a type body it is an
    /// initializer, or an empty declaration when it stands for a bare `;`.
    pub(crate) fn block(
        &mut self,
        id: HostId,
        flags: Flags,
        stats: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        if !ctx.blocks_are_initializers {
            return self.statement_block(id, stats, ctx);
        }
        let kind = if flags.contains(Flags::STATIC) {
            NodeKind::StaticInitializer
        } else if stats.is_empty() && self.host.block_end_pos(id).is_none() {
            return Ok(self.ast.alloc(NodeKind::EmptyDeclaration));
        } else {
            NodeKind::InstanceInitializer
        };
        let initializer = self.ast.alloc(kind);
        let body = self.statement_block(id, stats, ctx)?;
        self.ast.set_child(initializer, Field::Body, Some(body))?;
        Ok(initializer)
    }

    fn statement_block(
        &mut self,
        id: HostId,
        stats: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let block = self.alloc_at(NodeKind::Block, self.positions.span(id));
        self.fill_list(stats, block, Field::Contents, &ctx.fresh())?;
        Ok(block)
    }

    /// Converts a statement's condition into `field`. The parentheses the
    /// grammar requires around it are kept as a tag on the statement.
    fn condition(
        &mut self,
        statement: NodeId,
        field: Field,
        cond: HostId,
        ctx: &ConversionContext,
    ) -> Result<(), ConvertError> {
        let inner = match self.host_node(cond) {
            HostNode::Parens { expr } => {
                self.ast
                    .set_tag(statement, tags::PARENS, self.positions.span(cond));
                *expr
            }
            _ => cond,
        };
        self.convert_slot(statement, field, Some(inner), &ctx.fresh())
    }

    pub(crate) fn do_loop(
        &mut self,
        body: HostId,
        cond: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let node = self.ast.alloc(NodeKind::DoWhile);
        self.convert_slot(node, Field::Statement, Some(body), &ctx.fresh())?;
        self.condition(node, Field::Condition, cond, ctx)?;
        Ok(node)
    }

    pub(crate) fn while_loop(
        &mut self,
        cond: HostId,
        body: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let node = self.ast.alloc(NodeKind::While);
        self.condition(node, Field::Condition, cond, ctx)?;
        self.convert_slot(node, Field::Statement, Some(body), &ctx.fresh())?;
        Ok(node)
    }

    fn without_exec(&self, id: HostId) -> HostId {
        match self.host_node(id) {
            HostNode::Exec { expr } => *expr,
            _ => id,
        }
    }

    pub(crate) fn for_loop(
        &mut self,
        init: &[HostId],
        cond: Option<HostId>,
        step: &[HostId],
        body: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::For);
        let declares = init
            .iter()
            .any(|&item| matches!(self.host_node(item), HostNode::VarDef { .. }));
        if declares {
            let def_ctx = plain.clone().with_var_def_is_definition(true);
            self.fill_list(init, node, Field::Inits, &def_ctx)?;
        } else {
            for &item in init {
                let expr = self.convert_one(self.without_exec(item), &plain, "a for initializer")?;
                self.ast.push(node, Field::Inits, expr)?;
            }
        }
        self.convert_slot(node, Field::Condition, cond, &plain)?;
        for &item in step {
            let expr = self.convert_one(self.without_exec(item), &plain, "a for update")?;
            self.ast.push(node, Field::Updates, expr)?;
        }
        self.convert_slot(node, Field::Statement, Some(body), &plain)?;
        Ok(node)
    }

    pub(crate) fn foreach_loop(
        &mut self,
        var: HostId,
        expr: HostId,
        body: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::ForEach);
        let def_ctx = plain.clone().with_var_def_is_definition(true);
        self.convert_slot(node, Field::Variable, Some(var), &def_ctx)?;
        self.convert_slot(node, Field::Iterable, Some(expr), &plain)?;
        self.convert_slot(node, Field::Statement, Some(body), &plain)?;
        Ok(node)
    }

    pub(crate) fn labelled(
        &mut self,
        id: HostId,
        label: &SmolStr,
        body: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let node = self.ast.alloc(NodeKind::LabelledStatement);
        let name = self.identifier(label, self.positions.leading_span(id, label));
        self.ast.set_child(node, Field::Label, Some(name))?;
        self.convert_slot(node, Field::Statement, Some(body), &ctx.fresh())?;
        Ok(node)
    }

    /// The host keeps one statement list per case; canonically the cases
    /// are labels inside a single block.
    pub(crate) fn switch(
        &mut self,
        selector: HostId,
        cases: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::Switch);
        self.condition(node, Field::Condition, selector, ctx)?;

        let body = self.ast.alloc(NodeKind::Block);
        let mut body_span = Position::Unplaced;
        for &case in cases {
            let HostNode::Case { pat, stats } = self.host_node(case) else {
                return Err(self.unexpected("a switch case", case));
            };
            let label = match pat {
                Some(pat) => {
                    let span =
                        Position::from_offsets(self.positions.start(case), self.positions.end(*pat));
                    let label = self.alloc_at(NodeKind::Case, span);
                    self.convert_slot(label, Field::Condition, Some(*pat), &plain)?;
                    label
                }
                None => {
                    let span = self.positions.leading_span(case, "default");
                    self.alloc_at(NodeKind::Default, span)
                }
            };
            self.ast.push(body, Field::Contents, label)?;
            self.fill_list(stats, body, Field::Contents, &plain)?;
            body_span = body_span.cover(self.positions.span(case));
        }
        self.ast.place_if_unplaced(body, body_span);
        self.ast.set_child(node, Field::Body, Some(body))?;
        Ok(node)
    }

    pub(crate) fn synchronized(
        &mut self,
        lock: HostId,
        body: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let node = self.ast.alloc(NodeKind::Synchronized);
        self.condition(node, Field::Lock, lock, ctx)?;
        self.convert_slot(node, Field::Body, Some(body), &ctx.fresh())?;
        Ok(node)
    }

    pub(crate) fn try_statement(
        &mut self,
        body: HostId,
        catchers: &[HostId],
        finalizer: Option<HostId>,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::Try);
        self.convert_slot(node, Field::Body, Some(body), &plain)?;
        for &catcher in catchers {
            let catch = self.convert_one(catcher, &plain, "a catch clause")?;
            self.ast.push(node, Field::Catches, catch)?;
        }
        self.convert_slot(node, Field::Finally, finalizer, &plain)?;
        Ok(node)
    }

    pub(crate) fn catch(
        &mut self,
        param: HostId,
        body: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::Catch);
        let def_ctx = plain.clone().with_var_def_is_definition(true);
        self.convert_slot(node, Field::ExceptionDeclaration, Some(param), &def_ctx)?;
        self.convert_slot(node, Field::Body, Some(body), &plain)?;
        Ok(node)
    }

    pub(crate) fn if_statement(
        &mut self,
        cond: HostId,
        then_part: HostId,
        else_part: Option<HostId>,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::If);
        self.condition(node, Field::Condition, cond, ctx)?;
        self.convert_slot(node, Field::Statement, Some(then_part), &plain)?;
        self.convert_slot(node, Field::ElseStatement, else_part, &plain)?;
        Ok(node)
    }

    /// Explicit constructor calls are statements in their own right; every
    /// other expression gets an expression-statement wrapper.
    pub(crate) fn exec(
        &mut self,
        expr: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let inner = self.convert_one(expr, &ctx.fresh(), "an expression statement")?;
        if matches!(
            self.ast.kind(inner),
            NodeKind::AlternateConstructorInvocation | NodeKind::SuperConstructorInvocation
        ) {
            return Ok(inner);
        }
        let node = self.ast.alloc(NodeKind::ExpressionStatement);
        self.ast.set_child(node, Field::Expression, Some(inner))?;
        Ok(node)
    }

    /// `break`/`continue`. The host keeps no position for the label.
    pub(crate) fn jump(
        &mut self,
        kind: NodeKind,
        label: Option<&str>,
    ) -> Result<NodeId, ConvertError> {
        let node = self.ast.alloc(kind);
        if let Some(label) = label {
            let name = self.identifier(label, Position::Unplaced);
            self.ast.set_child(node, Field::Label, Some(name))?;
        }
        Ok(node)
    }
}
