use std::fmt;

use smol_str::SmolStr;

use crate::flags::Flags;

/// Stable identity of a host node, used wherever the host compares nodes by
/// reference (side table keys, shared modifier objects).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(u32);

impl HostId {
    pub fn from_raw(raw: u32) -> Self {
        HostId(raw)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostId({})", self.0)
    }
}

/// Operator encoding of the host front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostTag {
    Pos,
    Neg,
    Not,
    Compl,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Sl,
    Sr,
    Usr,
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    BitOrAsg,
    BitXorAsg,
    BitAndAsg,
    SlAsg,
    SrAsg,
    UsrAsg,
    PlusAsg,
    MinusAsg,
    MulAsg,
    DivAsg,
    ModAsg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTag {
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Void,
}

impl PrimitiveTag {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveTag::Byte => "byte",
            PrimitiveTag::Char => "char",
            PrimitiveTag::Short => "short",
            PrimitiveTag::Int => "int",
            PrimitiveTag::Long => "long",
            PrimitiveTag::Float => "float",
            PrimitiveTag::Double => "double",
            PrimitiveTag::Boolean => "boolean",
            PrimitiveTag::Void => "void",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    Unbound,
    Extends,
    Super,
}

impl BoundKind {
    pub fn token(self) -> &'static str {
        match self {
            BoundKind::Unbound => "?",
            BoundKind::Extends => "extends",
            BoundKind::Super => "super",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostLiteral {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Char(char),
    String(String),
    Null,
}

/// One node of the host parse tree. Children are referenced by [`HostId`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostNode {
    TopLevel {
        package_annotations: Vec<HostId>,
        package: Option<HostId>,
        defs: Vec<HostId>,
    },
    Import {
        qualid: HostId,
        is_static: bool,
    },
    ClassDef {
        modifiers: HostId,
        name: SmolStr,
        type_params: Vec<HostId>,
        extending: Option<HostId>,
        implementing: Vec<HostId>,
        defs: Vec<HostId>,
    },
    MethodDef {
        modifiers: HostId,
        name: SmolStr,
        return_type: Option<HostId>,
        type_params: Vec<HostId>,
        params: Vec<HostId>,
        thrown: Vec<HostId>,
        body: Option<HostId>,
        default_value: Option<HostId>,
    },
    VarDef {
        modifiers: HostId,
        name: SmolStr,
        var_type: HostId,
        init: Option<HostId>,
    },
    Skip,
    Block {
        flags: Flags,
        stats: Vec<HostId>,
    },
    DoLoop {
        body: HostId,
        cond: HostId,
    },
    WhileLoop {
        cond: HostId,
        body: HostId,
    },
    ForLoop {
        init: Vec<HostId>,
        cond: Option<HostId>,
        step: Vec<HostId>,
        body: HostId,
    },
    ForeachLoop {
        var: HostId,
        expr: HostId,
        body: HostId,
    },
    Labelled {
        label: SmolStr,
        body: HostId,
    },
    Switch {
        selector: HostId,
        cases: Vec<HostId>,
    },
    /// `pat` is `None` for `default:`.
    Case {
        pat: Option<HostId>,
        stats: Vec<HostId>,
    },
    Synchronized {
        lock: HostId,
        body: HostId,
    },
    Try {
        body: HostId,
        catchers: Vec<HostId>,
        finalizer: Option<HostId>,
    },
    Catch {
        param: HostId,
        body: HostId,
    },
    Conditional {
        cond: HostId,
        true_part: HostId,
        false_part: HostId,
    },
    If {
        cond: HostId,
        then_part: HostId,
        else_part: Option<HostId>,
    },
    Exec {
        expr: HostId,
    },
    Break {
        label: Option<SmolStr>,
    },
    Continue {
        label: Option<SmolStr>,
    },
    Return {
        expr: Option<HostId>,
    },
    Throw {
        expr: HostId,
    },
    Assert {
        cond: HostId,
        detail: Option<HostId>,
    },
    Apply {
        type_args: Vec<HostId>,
        meth: HostId,
        args: Vec<HostId>,
    },
    NewClass {
        encl: Option<HostId>,
        type_args: Vec<HostId>,
        clazz: HostId,
        args: Vec<HostId>,
        def: Option<HostId>,
    },
    /// `elem_type` is `None` for a bare `{ ... }` initializer.
    NewArray {
        elem_type: Option<HostId>,
        dims: Vec<HostId>,
        elems: Option<Vec<HostId>>,
    },
    Parens {
        expr: HostId,
    },
    Assign {
        lhs: HostId,
        rhs: HostId,
    },
    AssignOp {
        tag: HostTag,
        lhs: HostId,
        rhs: HostId,
    },
    Unary {
        tag: HostTag,
        arg: HostId,
    },
    Binary {
        tag: HostTag,
        lhs: HostId,
        rhs: HostId,
    },
    TypeCast {
        clazz: HostId,
        expr: HostId,
    },
    InstanceOf {
        expr: HostId,
        clazz: HostId,
    },
    Indexed {
        indexed: HostId,
        index: HostId,
    },
    Select {
        selected: HostId,
        name: SmolStr,
    },
    Ident {
        name: SmolStr,
    },
    Literal {
        value: HostLiteral,
    },
    PrimitiveType {
        tag: PrimitiveTag,
    },
    ArrayType {
        elem_type: HostId,
    },
    TypeApply {
        clazz: HostId,
        arguments: Vec<HostId>,
    },
    TypeParameter {
        name: SmolStr,
        bounds: Vec<HostId>,
    },
    /// `kind_node` points at the [`HostNode::TypeBoundKind`] token node when
    /// the front end kept one.
    Wildcard {
        kind: BoundKind,
        kind_node: Option<HostId>,
        inner: Option<HostId>,
    },
    TypeBoundKind {
        kind: BoundKind,
    },
    Annotation {
        annotation_type: HostId,
        args: Vec<HostId>,
    },
    Modifiers {
        flags: Flags,
        annotations: Vec<HostId>,
    },
    Erroneous,
    /// A node the adapter could not type.
    Unknown {
        kind: SmolStr,
    },
}

impl HostNode {
    pub fn kind_name(&self) -> &str {
        match self {
            HostNode::TopLevel { .. } => "TopLevel",
            HostNode::Import { .. } => "Import",
            HostNode::ClassDef { .. } => "ClassDef",
            HostNode::MethodDef { .. } => "MethodDef",
            HostNode::VarDef { .. } => "VarDef",
            HostNode::Skip => "Skip",
            HostNode::Block { .. } => "Block",
            HostNode::DoLoop { .. } => "DoLoop",
            HostNode::WhileLoop { .. } => "WhileLoop",
            HostNode::ForLoop { .. } => "ForLoop",
            HostNode::ForeachLoop { .. } => "ForeachLoop",
            HostNode::Labelled { .. } => "Labelled",
            HostNode::Switch { .. } => "Switch",
            HostNode::Case { .. } => "Case",
            HostNode::Synchronized { .. } => "Synchronized",
            HostNode::Try { .. } => "Try",
            HostNode::Catch { .. } => "Catch",
            HostNode::Conditional { .. } => "Conditional",
            HostNode::If { .. } => "If",
            HostNode::Exec { .. } => "Exec",
            HostNode::Break { .. } => "Break",
            HostNode::Continue { .. } => "Continue",
            HostNode::Return { .. } => "Return",
            HostNode::Throw { .. } => "Throw",
            HostNode::Assert { .. } => "Assert",
            HostNode::Apply { .. } => "Apply",
            HostNode::NewClass { .. } => "NewClass",
            HostNode::NewArray { .. } => "NewArray",
            HostNode::Parens { .. } => "Parens",
            HostNode::Assign { .. } => "Assign",
            HostNode::AssignOp { .. } => "AssignOp",
            HostNode::Unary { .. } => "Unary",
            HostNode::Binary { .. } => "Binary",
            HostNode::TypeCast { .. } => "TypeCast",
            HostNode::InstanceOf { .. } => "InstanceOf",
            HostNode::Indexed { .. } => "Indexed",
            HostNode::Select { .. } => "Select",
            HostNode::Ident { .. } => "Ident",
            HostNode::Literal { .. } => "Literal",
            HostNode::PrimitiveType { .. } => "PrimitiveType",
            HostNode::ArrayType { .. } => "ArrayType",
            HostNode::TypeApply { .. } => "TypeApply",
            HostNode::TypeParameter { .. } => "TypeParameter",
            HostNode::Wildcard { .. } => "Wildcard",
            HostNode::TypeBoundKind { .. } => "TypeBoundKind",
            HostNode::Annotation { .. } => "Annotation",
            HostNode::Modifiers { .. } => "Modifiers",
            HostNode::Erroneous => "Erroneous",
            HostNode::Unknown { kind } => kind.as_str(),
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<HostId> {
        fn opt(out: &mut Vec<HostId>, id: &Option<HostId>) {
            out.extend(id.iter().copied());
        }

        let mut out = Vec::new();
        match self {
            HostNode::TopLevel {
                package_annotations,
                package,
                defs,
            } => {
                out.extend(package_annotations);
                opt(&mut out, package);
                out.extend(defs);
            }
            HostNode::Import { qualid, .. } => out.push(*qualid),
            HostNode::ClassDef {
                modifiers,
                type_params,
                extending,
                implementing,
                defs,
                ..
            } => {
                out.push(*modifiers);
                out.extend(type_params);
                opt(&mut out, extending);
                out.extend(implementing);
                out.extend(defs);
            }
            HostNode::MethodDef {
                modifiers,
                return_type,
                type_params,
                params,
                thrown,
                body,
                default_value,
                ..
            } => {
                out.push(*modifiers);
                out.extend(type_params);
                opt(&mut out, return_type);
                out.extend(params);
                out.extend(thrown);
                opt(&mut out, body);
                opt(&mut out, default_value);
            }
            HostNode::VarDef {
                modifiers,
                var_type,
                init,
                ..
            } => {
                out.push(*modifiers);
                out.push(*var_type);
                opt(&mut out, init);
            }
            HostNode::Block { stats, .. } => out.extend(stats),
            HostNode::DoLoop { body, cond } => out.extend([*body, *cond]),
            HostNode::WhileLoop { cond, body } => out.extend([*cond, *body]),
            HostNode::ForLoop {
                init,
                cond,
                step,
                body,
            } => {
                out.extend(init);
                opt(&mut out, cond);
                out.extend(step);
                out.push(*body);
            }
            HostNode::ForeachLoop { var, expr, body } => out.extend([*var, *expr, *body]),
            HostNode::Labelled { body, .. } => out.push(*body),
            HostNode::Switch { selector, cases } => {
                out.push(*selector);
                out.extend(cases);
            }
            HostNode::Case { pat, stats } => {
                opt(&mut out, pat);
                out.extend(stats);
            }
            HostNode::Synchronized { lock, body } => out.extend([*lock, *body]),
            HostNode::Try {
                body,
                catchers,
                finalizer,
            } => {
                out.push(*body);
                out.extend(catchers);
                opt(&mut out, finalizer);
            }
            HostNode::Catch { param, body } => out.extend([*param, *body]),
            HostNode::Conditional {
                cond,
                true_part,
                false_part,
            } => out.extend([*cond, *true_part, *false_part]),
            HostNode::If {
                cond,
                then_part,
                else_part,
            } => {
                out.extend([*cond, *then_part]);
                opt(&mut out, else_part);
            }
            HostNode::Exec { expr } | HostNode::Parens { expr } | HostNode::Throw { expr } => {
                out.push(*expr)
            }
            HostNode::Return { expr } => opt(&mut out, expr),
            HostNode::Assert { cond, detail } => {
                out.push(*cond);
                opt(&mut out, detail);
            }
            HostNode::Apply {
                type_args,
                meth,
                args,
            } => {
                out.extend(type_args);
                out.push(*meth);
                out.extend(args);
            }
            HostNode::NewClass {
                encl,
                type_args,
                clazz,
                args,
                def,
            } => {
                opt(&mut out, encl);
                out.extend(type_args);
                out.push(*clazz);
                out.extend(args);
                opt(&mut out, def);
            }
            HostNode::NewArray {
                elem_type,
                dims,
                elems,
            } => {
                opt(&mut out, elem_type);
                out.extend(dims);
                if let Some(elems) = elems {
                    out.extend(elems);
                }
            }
            HostNode::Assign { lhs, rhs }
            | HostNode::AssignOp { lhs, rhs, .. }
            | HostNode::Binary { lhs, rhs, .. } => out.extend([*lhs, *rhs]),
            HostNode::Unary { arg, .. } => out.push(*arg),
            HostNode::TypeCast { clazz, expr } => out.extend([*clazz, *expr]),
            HostNode::InstanceOf { expr, clazz } => out.extend([*expr, *clazz]),
            HostNode::Indexed { indexed, index } => out.extend([*indexed, *index]),
            HostNode::Select { selected, .. } => out.push(*selected),
            HostNode::ArrayType { elem_type } => out.push(*elem_type),
            HostNode::TypeApply { clazz, arguments } => {
                out.push(*clazz);
                out.extend(arguments);
            }
            HostNode::TypeParameter { bounds, .. } => out.extend(bounds),
            HostNode::Wildcard {
                kind_node, inner, ..
            } => {
                opt(&mut out, kind_node);
                opt(&mut out, inner);
            }
            HostNode::Annotation {
                annotation_type,
                args,
            } => {
                out.push(*annotation_type);
                out.extend(args);
            }
            HostNode::Modifiers { annotations, .. } => out.extend(annotations),
            HostNode::Skip
            | HostNode::Break { .. }
            | HostNode::Continue { .. }
            | HostNode::Ident { .. }
            | HostNode::Literal { .. }
            | HostNode::PrimitiveType { .. }
            | HostNode::TypeBoundKind { .. }
            | HostNode::Erroneous
            | HostNode::Unknown { .. } => {}
        }
        out
    }
}
