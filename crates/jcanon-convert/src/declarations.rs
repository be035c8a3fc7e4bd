//! Compilation units, type declarations, members, modifiers and annotations.

use jcanon_ast::{tags, Field, Keyword, NodeId, NodeKind, Position};
use jcanon_host::{names, Flags, HostId, HostNode, HostTreeAdapter};
use smol_str::SmolStr;

use crate::context::ConversionContext;
use crate::engine::Converter;
use crate::error::ConvertError;

fn keyword_flag(keyword: Keyword) -> Flags {
    match keyword {
        Keyword::Public => Flags::PUBLIC,
        Keyword::Private => Flags::PRIVATE,
        Keyword::Protected => Flags::PROTECTED,
        Keyword::Static => Flags::STATIC,
        Keyword::Final => Flags::FINAL,
        Keyword::Synchronized => Flags::SYNCHRONIZED,
        Keyword::Volatile => Flags::VOLATILE,
        Keyword::Transient => Flags::TRANSIENT,
        Keyword::Native => Flags::NATIVE,
        Keyword::Abstract => Flags::ABSTRACT,
        Keyword::Strictfp => Flags::STRICTFP,
    }
}

/// Keyword modifiers of a flag set, in canonical order.
pub fn keywords_of(flags: Flags) -> impl Iterator<Item = Keyword> {
    Keyword::ALL
        .into_iter()
        .filter(move |keyword| flags.contains(keyword_flag(*keyword)))
}

#[derive(Clone, Copy)]
enum TypeDeclKind {
    Class,
    Interface,
    Annotation,
    Enum,
}

fn classify(flags: Flags) -> TypeDeclKind {
    if flags.contains(Flags::ANNOTATION) {
        TypeDeclKind::Annotation
    } else if flags.contains(Flags::INTERFACE) {
        TypeDeclKind::Interface
    } else if flags.contains(Flags::ENUM) {
        TypeDeclKind::Enum
    } else {
        TypeDeclKind::Class
    }
}

impl<'h, H: HostTreeAdapter + ?Sized> Converter<'h, H> {
    pub(crate) fn top_level(
        &mut self,
        package_annotations: &[HostId],
        package: Option<HostId>,
        defs: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let unit = self.ast.alloc(NodeKind::CompilationUnit);
        if let Some(pid) = package {
            let pkg = self.alloc_at(NodeKind::PackageDeclaration, self.positions.span(pid));
            self.fill_list(package_annotations, pkg, Field::Annotations, &ctx.fresh())?;
            self.fill_identifiers(pid, pkg, Field::Parts)?;
            self.ast.set_child(unit, Field::PackageDeclaration, Some(pkg))?;
        }
        let decl_ctx = ctx.fresh().with_skip_is_declaration(true);
        for &def in defs {
            let (field, def_ctx) = match self.host_node(def) {
                HostNode::Import { .. } => (Field::ImportDeclarations, ctx.fresh()),
                _ => (Field::TypeDeclarations, decl_ctx.clone()),
            };
            let node = self.convert_one(def, &def_ctx, "a top-level declaration")?;
            self.ast.push(unit, field, node)?;
        }
        Ok(unit)
    }

    /// Flattens a dotted name into identifier parts.
    pub(crate) fn fill_identifiers(
        &mut self,
        id: HostId,
        parent: NodeId,
        field: Field,
    ) -> Result<(), ConvertError> {
        match self.host_node(id) {
            HostNode::Ident { name } => {
                let part = self.identifier(name, self.positions.span(id));
                self.ast.push(parent, field, part)?;
            }
            HostNode::Select { selected, name } => {
                self.fill_identifiers(*selected, parent, field)?;
                let part = self.identifier(name, self.positions.trailing_span(id, name));
                self.ast.push(parent, field, part)?;
            }
            _ => return Err(self.unexpected("a qualified name", id)),
        }
        Ok(())
    }

    pub(crate) fn import(&mut self, qualid: HostId, is_static: bool) -> Result<NodeId, ConvertError> {
        let import = self.ast.alloc(NodeKind::ImportDeclaration {
            static_import: is_static,
            star_import: false,
        });
        self.fill_identifiers(qualid, import, Field::Parts)?;
        let last = self.ast.items(import, Field::Parts).last().copied();
        if let Some(last) = last {
            if matches!(self.ast.kind(last), NodeKind::Identifier { value } if value == names::STAR)
            {
                self.ast.detach(last);
                self.ast.update_kind(import, |kind| {
                    if let NodeKind::ImportDeclaration { star_import, .. } = kind {
                        *star_import = true;
                    }
                });
            }
        }
        Ok(import)
    }

    pub(crate) fn class_def(
        &mut self,
        id: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let HostNode::ClassDef {
            modifiers,
            name,
            type_params,
            extending,
            implementing,
            defs,
        } = self.host_node(id)
        else {
            return Err(self.unexpected("a class declaration", id));
        };
        let flags = self.modifier_flags(*modifiers)?;
        let plain = ctx.fresh();
        let type_ctx = plain.clone().with_type_reference(true);
        let member_ctx = plain
            .clone()
            .with_blocks_are_initializers(true)
            .with_skip_is_declaration(true)
            .with_containing_type_name(Some(name.clone()));

        let decl_kind = classify(flags);
        let decl = self.ast.alloc(match decl_kind {
            TypeDeclKind::Class => NodeKind::ClassDeclaration,
            TypeDeclKind::Interface => NodeKind::InterfaceDeclaration,
            TypeDeclKind::Annotation => NodeKind::AnnotationDeclaration,
            TypeDeclKind::Enum => NodeKind::EnumDeclaration,
        });
        self.convert_slot(decl, Field::Modifiers, Some(*modifiers), &plain)?;
        let name_node = self.identifier(name, self.positions.name_span(id, name));
        self.ast.set_child(decl, Field::Name, Some(name_node))?;

        let body = match decl_kind {
            TypeDeclKind::Class => {
                self.fill_list(type_params, decl, Field::TypeVariables, &plain)?;
                self.convert_slot(decl, Field::Extending, *extending, &type_ctx)?;
                self.fill_list(implementing, decl, Field::Implementing, &type_ctx)?;
                self.type_body(defs, &member_ctx)?
            }
            TypeDeclKind::Interface => {
                self.fill_list(type_params, decl, Field::TypeVariables, &plain)?;
                // The host keeps an interface's `extends` clause in its
                // implementing list.
                self.fill_list(implementing, decl, Field::Extending, &type_ctx)?;
                self.type_body(defs, &member_ctx)?
            }
            TypeDeclKind::Annotation => {
                let ctx = member_ctx.with_methods_are_annotation_elements(true);
                self.type_body(defs, &ctx)?
            }
            TypeDeclKind::Enum => {
                self.fill_list(implementing, decl, Field::Implementing, &type_ctx)?;
                self.enum_body(defs, name, &member_ctx)?
            }
        };
        self.ast.set_child(decl, Field::Body, Some(body))?;
        Ok(decl)
    }

    pub(crate) fn type_body(
        &mut self,
        defs: &[HostId],
        member_ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let body = self.ast.alloc(NodeKind::NormalTypeBody);
        self.fill_list(defs, body, Field::Members, member_ctx)?;
        Ok(body)
    }

    fn is_enum_constant(&self, id: HostId) -> Result<bool, ConvertError> {
        match self.host_node(id) {
            HostNode::VarDef { modifiers, .. } => {
                Ok(self.modifier_flags(*modifiers)? == Flags::ENUM_CONSTANT)
            }
            _ => Ok(false),
        }
    }

    fn enum_body(
        &mut self,
        defs: &[HostId],
        enum_name: &SmolStr,
        member_ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let body = self.ast.alloc(NodeKind::EnumTypeBody);
        let mut members = Vec::new();
        for &def in defs {
            if self.is_enum_constant(def)? {
                let constant = self.enum_constant(def, member_ctx)?;
                self.ast.push(body, Field::Constants, constant)?;
            } else {
                members.push(def);
            }
        }
        tracing::trace!(
            target: "jcanon.convert",
            name = %enum_name,
            constants = self.ast.items(body, Field::Constants).len(),
            members = members.len(),
            "split enum body"
        );
        self.fill_list(&members, body, Field::Members, member_ctx)?;
        Ok(body)
    }

    /// An enum constant is a field whose initializer instantiates the enum;
    /// the instantiation's arguments and anonymous body move into the
    /// constant.
    fn enum_constant(
        &mut self,
        id: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let HostNode::VarDef {
            modifiers,
            name,
            init,
            ..
        } = self.host_node(id)
        else {
            return Err(self.unexpected("an enum constant", id));
        };
        let constant = self.alloc_at(NodeKind::EnumConstant, self.positions.span(id));
        if let HostNode::Modifiers { annotations, .. } = self.host_node(*modifiers) {
            self.fill_list(annotations, constant, Field::Annotations, &ctx.fresh())?;
        }
        let name_node = self.identifier(name, self.positions.name_span(id, name));
        self.ast.set_child(constant, Field::Name, Some(name_node))?;

        if let Some(init) = *init {
            if !matches!(self.host_node(init), HostNode::NewClass { .. }) {
                return Err(self.unexpected("an enum constant instantiation", init));
            }
            let invocation = self.convert_one(init, &ctx.fresh(), "an enum constant")?;
            let arguments = self.ast.items(invocation, Field::Arguments).to_vec();
            for argument in arguments {
                self.ast.push(constant, Field::Arguments, argument)?;
            }
            let body = self.ast.child(invocation, Field::AnonymousClassBody);
            self.ast.set_child(constant, Field::Body, body)?;
        }
        Ok(constant)
    }

    pub(crate) fn method_def(
        &mut self,
        id: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let HostNode::MethodDef {
            modifiers,
            name,
            return_type,
            type_params,
            params,
            thrown,
            body,
            default_value,
        } = self.host_node(id)
        else {
            return Err(self.unexpected("a method declaration", id));
        };
        let plain = ctx.fresh();
        let type_ctx = plain.clone().with_type_reference(true);
        let param_ctx = plain.clone().with_var_def_is_definition(true);

        if ctx.methods_are_annotation_elements {
            let decl = self.ast.alloc(NodeKind::AnnotationMethodDeclaration);
            self.convert_slot(decl, Field::Modifiers, Some(*modifiers), &plain)?;
            self.convert_slot(decl, Field::ReturnTypeReference, *return_type, &type_ctx)?;
            let name_node = self.identifier(name, self.positions.name_span(id, name));
            self.ast.set_child(decl, Field::Name, Some(name_node))?;
            let value = default_value
                .map(|value| self.annotation_value(value, &plain))
                .transpose()?;
            self.ast.set_child(decl, Field::DefaultValue, value)?;
            return Ok(decl);
        }

        let decl = if name == names::INIT {
            let decl = self.ast.alloc(NodeKind::ConstructorDeclaration);
            let type_name = ctx.containing_type_name.clone().unwrap_or_default();
            let span = match &ctx.containing_type_name {
                Some(type_name) => self.positions.name_span(id, type_name),
                None => Position::Unplaced,
            };
            self.convert_slot(decl, Field::Modifiers, Some(*modifiers), &plain)?;
            self.fill_list(type_params, decl, Field::TypeVariables, &plain)?;
            let name_node = self.identifier(&type_name, span);
            self.ast.set_child(decl, Field::TypeName, Some(name_node))?;
            decl
        } else {
            let decl = self.ast.alloc(NodeKind::MethodDeclaration);
            self.convert_slot(decl, Field::Modifiers, Some(*modifiers), &plain)?;
            self.fill_list(type_params, decl, Field::TypeVariables, &plain)?;
            self.convert_slot(decl, Field::ReturnTypeReference, *return_type, &type_ctx)?;
            let name_node = self.identifier(name, self.positions.name_span(id, name));
            self.ast.set_child(decl, Field::Name, Some(name_node))?;
            decl
        };
        self.fill_list(params, decl, Field::Parameters, &param_ctx)?;
        self.fill_list(thrown, decl, Field::ThrownTypeReferences, &type_ctx)?;
        self.convert_slot(decl, Field::Body, *body, &plain)?;
        Ok(decl)
    }

    pub(crate) fn modifiers(
        &mut self,
        flags: Flags,
        annotations: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let node = self.ast.alloc(NodeKind::Modifiers);
        self.fill_list(annotations, node, Field::Annotations, &ctx.fresh())?;
        for keyword in keywords_of(flags) {
            let modifier = self.ast.alloc(NodeKind::KeywordModifier { keyword });
            self.ast.push(node, Field::Keywords, modifier)?;
        }
        Ok(node)
    }

    pub(crate) fn annotation(
        &mut self,
        annotation_type: HostId,
        args: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let plain = ctx.fresh();
        let node = self.ast.alloc(NodeKind::Annotation);
        self.convert_slot(
            node,
            Field::AnnotationTypeReference,
            Some(annotation_type),
            &plain.clone().with_type_reference(true),
        )?;
        for &arg in args {
            let element = self.alloc_at(NodeKind::AnnotationElement, self.positions.span(arg));
            let value = match self.host_node(arg) {
                HostNode::Assign { lhs, rhs } => match self.host_node(*lhs) {
                    HostNode::Ident { name } => {
                        let name_node = self.identifier(name, self.positions.span(*lhs));
                        self.ast.set_child(element, Field::Name, Some(name_node))?;
                        *rhs
                    }
                    _ => arg,
                },
                _ => arg,
            };
            let value = self.annotation_value(value, &plain)?;
            self.ast.set_child(element, Field::Value, Some(value))?;
            self.ast.push(node, Field::Elements, element)?;
        }
        Ok(node)
    }

    /// An annotation argument: a nested annotation, a brace array of values,
    /// or an ordinary expression.
    pub(crate) fn annotation_value(
        &mut self,
        id: HostId,
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        match self.host_node(id) {
            HostNode::NewArray {
                elem_type: None,
                elems,
                ..
            } => {
                let array = self.alloc_at(NodeKind::AnnotationValueArray, self.positions.span(id));
                for &elem in elems.as_deref().unwrap_or_default() {
                    let value = self.annotation_value(elem, ctx)?;
                    self.ast.push(array, Field::Values, value)?;
                }
                Ok(array)
            }
            _ => self.convert_one(id, ctx, "an annotation value"),
        }
    }

    pub(crate) fn type_parameter(
        &mut self,
        id: HostId,
        name: &str,
        bounds: &[HostId],
        ctx: &ConversionContext,
    ) -> Result<NodeId, ConvertError> {
        let var = self.ast.alloc(NodeKind::TypeVariable);
        let name_node = self.identifier(name, self.positions.leading_span(id, name));
        self.ast.set_child(var, Field::Name, Some(name_node))?;
        self.fill_list(
            bounds,
            var,
            Field::Extending,
            &ctx.fresh().with_type_reference(true),
        )?;
        Ok(var)
    }

    /// Records the `<...>` section around explicit type arguments.
    pub(crate) fn tag_type_arguments(&mut self, node: NodeId, type_args: &[HostId]) {
        let (Some(first), Some(last)) = (type_args.first(), type_args.last()) else {
            return;
        };
        let span = match (self.positions.start(*first), self.positions.end(*last)) {
            (Some(start), Some(end)) => Position::new(start.saturating_sub(1), end + 1),
            _ => Position::Unplaced,
        };
        self.ast.set_tag(node, tags::TYPE_ARGUMENTS, span);
    }
}
