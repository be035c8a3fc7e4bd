//! Declarator folding.
//!
//! The host represents `int a, b[];` as two sibling declarators sharing one
//! modifiers node. A maximal run of declarators with the same modifiers node
//! (by identity) becomes one canonical definition with one entry per
//! declarator.

use jcanon_ast::{tags, Field, NodeId, NodeKind, Position};
use jcanon_host::{Flags, HostId, HostNode, HostTreeAdapter};

use crate::context::ConversionContext;
use crate::engine::Converter;
use crate::error::ConvertError;

impl<'h, H: HostTreeAdapter + ?Sized> Converter<'h, H> {
    /// Converts `items` into the list `field` of `parent`, folding runs of
    /// declarators that share a modifiers node.
    pub(crate) fn fill_list(
        &mut self,
        items: &[HostId],
        parent: NodeId,
        field: Field,
        ctx: &ConversionContext,
    ) -> Result<(), ConvertError> {
        let folding = self.options.fold_declarators && !ctx.folding_disabled;
        let mut run: Vec<HostId> = Vec::new();
        let mut run_modifiers = None;

        for &item in items {
            if let HostNode::VarDef { modifiers, .. } = self.host_node(item) {
                if folding && run_modifiers == Some(*modifiers) {
                    run.push(item);
                    continue;
                }
                self.flush_run(&mut run, parent, field, ctx)?;
                run_modifiers = Some(*modifiers);
                run.push(item);
                continue;
            }
            self.flush_run(&mut run, parent, field, ctx)?;
            run_modifiers = None;
            if let Some(node) = self.convert(item, ctx)? {
                self.ast.push(parent, field, node)?;
            }
        }
        self.flush_run(&mut run, parent, field, ctx)
    }

    fn flush_run(
        &mut self,
        run: &mut Vec<HostId>,
        parent: NodeId,
        field: Field,
        ctx: &ConversionContext,
    ) -> Result<(), ConvertError> {
        if let Some((&first, rest)) = run.split_first() {
            let node = self.fold_run(first, rest, ctx)?;
            self.ast.push(parent, field, node)?;
        }
        run.clear();
        Ok(())
    }

    /// Array wrappers directly around a type, outermost first.
    fn array_wrappers(&self, mut ty: HostId) -> Vec<HostId> {
        let mut wrappers = Vec::new();
        while let HostNode::ArrayType { elem_type } = self.host_node(ty) {
            wrappers.push(ty);
            ty = *elem_type;
        }
        wrappers
    }

    /// Folds `first` and the declarators in `rest` (all sharing one
    /// modifiers node) into a single definition, wrapped in a declaration
    /// statement unless the context asks for a bare definition.
    pub(crate) fn fold_run(
        &mut self,
        first: HostId,
        rest: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let last = rest.last().copied().unwrap_or(first);
        let HostNode::VarDef {
            modifiers,
            var_type,
            ..
        } = self.host_node(first)
        else {
            return Err(self.unexpected("a variable declarator", first));
        };
        self.check_depth(first, ctx.depth)?;
        let plain = ctx.fresh();
        let varargs = self.modifier_flags(*modifiers)?.contains(Flags::VARARGS);

        let mut base = *var_type;
        let mut varargs_span = Position::Unplaced;
        if varargs {
            if let HostNode::ArrayType { elem_type } = self.host_node(base) {
                varargs_span = match self.host.preferred_pos(base) {
                    Some(pos) => Position::new(pos, pos + 3),
                    None => Position::Unplaced,
                };
                base = *elem_type;
            }
        }

        // `int[] a, b` keeps its brackets on the shared type, while in
        // `int a[], b` they belong to `a` alone. Only positions tell the two
        // apart: a wrapper ending past the first name was written after it.
        let run_start = self.host.preferred_pos(first);
        while let HostNode::ArrayType { elem_type } = self.host_node(base) {
            match (self.positions.end(base), run_start) {
                (Some(end), Some(start)) if end > start => base = *elem_type,
                _ => break,
            }
        }
        let shared_dims = self.array_wrappers(base).len() as u32;

        let definition = self.ast.alloc(NodeKind::VariableDefinition { varargs });
        let span = Position::from_offsets(self.positions.start(first), self.positions.end(last));
        self.ast.place_if_unplaced(definition, span);
        self.convert_slot(definition, Field::Modifiers, Some(*modifiers), &plain)?;
        let type_ctx = plain.clone().with_type_reference(true);
        self.convert_slot(definition, Field::TypeReference, Some(base), &type_ctx)?;
        self.ast.set_tag(definition, tags::VARARGS, varargs_span);

        for &declarator in std::iter::once(&first).chain(rest) {
            let entry = self.declarator_entry(declarator, varargs, shared_dims, &plain)?;
            self.ast.push(definition, Field::Variables, entry)?;
        }

        tracing::debug!(
            target: "jcanon.fold",
            declarators = rest.len() + 1,
            shared_dims,
            varargs,
            "folded declarator run"
        );

        if ctx.var_def_is_definition {
            return Ok(definition);
        }
        let declaration = self.alloc_at(NodeKind::VariableDeclaration, span);
        self.ast.set_child(declaration, Field::Definition, Some(definition))?;
        Ok(declaration)
    }

    fn declarator_entry(
        &mut self,
        declarator: HostId,
        varargs: bool,
        shared_dims: u32,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let HostNode::VarDef {
            name,
            var_type,
            init,
            ..
        } = self.host_node(declarator)
        else {
            return Err(self.unexpected("a variable declarator", declarator));
        };

        let mut wrappers = self.array_wrappers(*var_type);
        if varargs && !wrappers.is_empty() {
            wrappers.remove(0);
        }
        let extra = (wrappers.len() as u32).saturating_sub(shared_dims);
        let entry = self.ast.alloc(NodeKind::VariableDefinitionEntry {
            array_dimensions: extra,
        });

        let name_span = self.positions.name_span(declarator, name);
        let entry_span = Position::from_offsets(name_span.start(), self.positions.end(declarator));
        self.ast.place_if_unplaced(entry, entry_span);
        let name_node = self.identifier(name, name_span);
        self.ast.set_child(entry, Field::Name, Some(name_node))?;

        // The extra dimensions are the outermost wrappers. The host nests
        // brackets right to left, so the outermost one is written first. Every
        // wrapper ends after the last `]`; a pair ends where the next begins.
        let own = &wrappers[..extra as usize];
        for (n, &wrapper) in own.iter().enumerate() {
            let end = match own.get(n + 1) {
                Some(&next) => self.host.preferred_pos(next),
                None => self.positions.end(wrapper),
            };
            let bracket = Position::from_offsets(self.host.preferred_pos(wrapper), end);
            self.ast.set_tag(entry, tags::dimension(n as u32), bracket);
        }

        self.convert_slot(entry, Field::Initializer, *init, ctx)?;
        Ok(entry)
    }
}
